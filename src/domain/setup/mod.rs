pub mod handler;

pub use handler::setup_db;
