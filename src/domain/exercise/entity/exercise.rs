use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 훈련 과제 (øvelse)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exercise_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub uses_positions: bool,
    pub minimum_participants: Option<i32>,
    pub category_id: Option<i64>,
    /// 가져온 원본 자료에 적혀 있던 포지션 표기 그대로
    pub original_position_label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::CategoryId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::exercise_variation::Entity")]
    ExerciseVariation,
    #[sea_orm(has_many = "super::exercise_position::Entity")]
    ExercisePosition,
    #[sea_orm(has_many = "super::exercise_focus_point::Entity")]
    ExerciseFocusPoint,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::exercise_variation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseVariation.def()
    }
}

impl Related<super::exercise_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExercisePosition.def()
    }
}

impl Related<super::exercise_focus_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseFocusPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
