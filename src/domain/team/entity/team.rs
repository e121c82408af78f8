use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub team_id: i64,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::player::entity::player::Entity")]
    Player,
    #[sea_orm(has_many = "crate::domain::training::entity::training::Entity")]
    Training,
    #[sea_orm(has_many = "crate::domain::training::entity::training_team::Entity")]
    TrainingTeam,
}

impl Related<crate::domain::player::entity::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<crate::domain::training::entity::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl Related<crate::domain::training::entity::training_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
