use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_focus_point")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exercise_focus_point_id: i64,
    pub exercise_id: i64,
    pub focus_point_id: i64,
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
    #[sea_orm(
        belongs_to = "super::focus_point::Entity",
        from = "Column::FocusPointId",
        to = "super::focus_point::Column::FocusPointId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FocusPoint,
}

impl Related<super::exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercise.def()
    }
}

impl Related<super::focus_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FocusPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
