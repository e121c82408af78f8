use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::position::DefensivePosition;

/// 선수 수비 포지션
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player_defensive_position")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub player_defensive_position_id: i64,
    pub player_id: i64,
    pub position: DefensivePosition,
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
