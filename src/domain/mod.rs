pub mod exercise;
pub mod health;
pub mod player;
pub mod position;
pub mod setup;
pub mod team;
pub mod training;
