//! 통합 테스트 공용 헬퍼: 테스트마다 새 인메모리 SQLite DB를 사용합니다.
#![allow(dead_code)]

use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use server::config::{connect, create_tables, AppConfig};
use server::AppState;

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_schema_update: true,
        log_dir: "logs".to_string(),
    }
}

/// 테이블이 생성된 빈 DB로 AppState 생성
pub async fn test_state() -> AppState {
    let config = test_config();
    let db = connect(&config.database_url).await.unwrap();
    create_tables(&db).await.unwrap();
    AppState::new(db, config)
}

/// HTTP 응답을 JSON으로 파싱
pub async fn response_to_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
