pub mod category;
pub mod exercise;
pub mod exercise_focus_point;
pub mod exercise_position;
pub mod exercise_variation;
pub mod focus_point;
