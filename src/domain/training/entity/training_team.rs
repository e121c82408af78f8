use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 공동 훈련 ↔ 팀 연결 (training_id, team_id unique)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub training_team_id: i64,
    pub training_id: i64,
    pub team_id: i64,
    pub enrolled_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training::Entity",
        from = "Column::TrainingId",
        to = "super::training::Column::TrainingId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Training,
    #[sea_orm(
        belongs_to = "crate::domain::team::entity::team::Entity",
        from = "Column::TeamId",
        to = "crate::domain::team::entity::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl Related<crate::domain::team::entity::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
