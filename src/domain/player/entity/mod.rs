pub mod defensive_position;
pub mod offensive_position;
pub mod player;
