pub mod training;
pub mod training_attendance;
pub mod training_team;
