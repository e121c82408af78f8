use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 훈련
///
/// - 단독 훈련: `team_id` 지정, `is_shared = false`
/// - 공동 훈련: `team_id` 없음, `is_shared = true`, 참여 팀은 `training_team`으로 연결
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub training_id: i64,
    pub team_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub date: Date,
    pub is_shared: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::team::entity::team::Entity",
        from = "Column::TeamId",
        to = "crate::domain::team::entity::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(has_many = "super::training_team::Entity")]
    TrainingTeam,
    #[sea_orm(has_many = "super::training_attendance::Entity")]
    TrainingAttendance,
}

impl Related<crate::domain::team::entity::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::training_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingTeam.def()
    }
}

impl Related<super::training_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
