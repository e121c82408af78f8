use std::env;

/// 기본 SQLite 파일 경로 (없으면 생성)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/handball.db?mode=rwc";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    /// 시작 시 테이블 자동 생성 여부
    pub db_schema_update: bool,
    pub log_dir: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedDatabase(database_url));
        }

        let db_schema_update = match env::var("DB_SCHEMA_UPDATE") {
            Ok(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidSchemaUpdate(value))?,
            Err(_) => true,
        };

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            server_port,
            database_url,
            db_schema_update,
            log_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Only sqlite database URLs are supported, got '{0}'")]
    UnsupportedDatabase(String),
    #[error("DB_SCHEMA_UPDATE must be 'true' or 'false', got '{0}'")]
    InvalidSchemaUpdate(String),
}
