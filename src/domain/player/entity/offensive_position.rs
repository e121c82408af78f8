use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::position::OffensivePosition;

/// 선수 공격 포지션 (선수당 코드 중복 불가, unique index)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player_offensive_position")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub player_offensive_position_id: i64,
    pub player_id: i64,
    pub position: OffensivePosition,
    pub is_primary: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::PlayerId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
