use axum::extract::State;
use tracing::{error, info};

use crate::config::create_tables;
use crate::state::AppState;
use crate::utils::ActionResult;

/// DB 초기화 API
///
/// 모든 테이블과 인덱스를 `IF NOT EXISTS`로 생성합니다. 여러 번 호출해도 안전합니다.
#[utoipa::path(
    get,
    path = "/api/setup-db",
    tag = "Setup",
    responses(
        (status = 200, description = "테이블 생성 완료", body = ActionResult),
        (status = 500, description = "테이블 생성 실패", body = ActionResult)
    )
)]
pub async fn setup_db(State(state): State<AppState>) -> ActionResult {
    match create_tables(&state.db).await {
        Ok(()) => {
            info!("DB 초기화 완료");
            ActionResult::ok("Databasen er klar.")
        }
        Err(e) => {
            error!(error = %e, "DB 초기화 실패");
            ActionResult::failed(format!("Databasen kunne ikke oprettes: {}", e))
        }
    }
}
