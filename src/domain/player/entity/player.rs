use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub player_id: i64,
    pub team_id: i64,
    pub name: String,
    pub jersey_number: Option<i32>,
    pub is_goalkeeper: bool,
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
    #[sea_orm(has_many = "super::offensive_position::Entity")]
    OffensivePosition,
    #[sea_orm(has_many = "super::defensive_position::Entity")]
    DefensivePosition,
    #[sea_orm(has_many = "crate::domain::training::entity::training_attendance::Entity")]
    TrainingAttendance,
}

impl Related<crate::domain::team::entity::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::offensive_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OffensivePosition.def()
    }
}

impl Related<super::defensive_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefensivePosition.def()
    }
}

impl Related<crate::domain::training::entity::training_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
