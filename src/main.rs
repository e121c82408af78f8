use std::net::SocketAddr;

use server::config::{establish_connection, AppConfig};
use server::domain::health::init_start_time;
use server::shutdown::shutdown_signal;
use server::utils::logging::init_logging;
use server::{app, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    // 3. 로깅 초기화 (guard는 main이 끝날 때까지 유지)
    let _guard = init_logging(&config.log_dir);
    init_start_time();

    // 4. DB 연결 (DB_SCHEMA_UPDATE=true면 테이블 동기화 포함)
    let db = match establish_connection(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, database_url = %config.database_url, "DB 연결 실패");
            std::process::exit(1);
        }
    };

    // 5. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = app(AppState::new(db, config));

    // 6. 서버 실행
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "포트 바인딩 실패");
            std::process::exit(1);
        }
    };

    info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "서버 오류");
    }

    info!("Server stopped");
}
