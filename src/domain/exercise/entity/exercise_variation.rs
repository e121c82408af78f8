use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_variation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exercise_variation_id: i64,
    pub exercise_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exercise::Entity",
        from = "Column::ExerciseId",
        to = "super::exercise::Column::ExerciseId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Exercise,
    #[sea_orm(has_many = "super::exercise_position::Entity")]
    ExercisePosition,
}

impl Related<super::exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercise.def()
    }
}

impl Related<super::exercise_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExercisePosition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
