use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "focus_point")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub focus_point_id: i64,
    #[sea_orm(unique)]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exercise_focus_point::Entity")]
    ExerciseFocusPoint,
}

impl Related<super::exercise_focus_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseFocusPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
