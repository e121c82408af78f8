use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 과제에 필요한 포지션별 인원
///
/// `variation_id`가 NULL이면 기본 과제의 포지션입니다.
/// `position_code`는 `is_offensive`에 따라 공격/수비 코드 집합 중 하나이며 서비스에서 검증합니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_position")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exercise_position_id: i64,
    pub exercise_id: i64,
    pub variation_id: Option<i64>,
    pub position_code: String,
    pub count_required: i32,
    pub is_offensive: bool,
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
        belongs_to = "super::exercise_variation::Entity",
        from = "Column::VariationId",
        to = "super::exercise_variation::Column::ExerciseVariationId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ExerciseVariation,
}

impl Related<super::exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercise.def()
    }
}

impl Related<super::exercise_variation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseVariation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
