use crate::config::AppConfig;
use crate::utils::Revalidator;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub revalidator: Revalidator,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db,
            config,
            revalidator: Revalidator::new(),
        }
    }
}
