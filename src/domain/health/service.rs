use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};

/// 서버 시작 시간 (전역)
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// DB 체크 타임아웃
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Degraded 상태 임계값
const DEGRADED_THRESHOLD: Duration = Duration::from_millis(500);

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 전체 헬스 체크 수행
pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = check_database(db).await;

    HealthStatus {
        status: determine_health_state(&database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        checks: HealthChecks { database },
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    if let Some(latency) = check.latency_ms {
        if latency >= DEGRADED_THRESHOLD.as_millis() as u64 {
            return HealthState::Degraded;
        }
    }

    HealthState::Healthy
}

/// DB ping
async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();

    let result = timeout(HEALTH_CHECK_TIMEOUT, db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(())) => {
            tracing::debug!(latency_ms, "database health check passed");
            CheckResult::success(latency_ms)
        }
        Ok(Err(e)) => {
            tracing::warn!(latency_ms, error = %e, "database health check failed");
            CheckResult::failure(latency_ms, e.to_string())
        }
        Err(_) => {
            tracing::warn!("database health check timed out");
            CheckResult::timeout(HEALTH_CHECK_TIMEOUT.as_millis() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_start_time_should_set_once() {
        init_start_time();
        let first = START_TIME.get();

        init_start_time();

        assert_eq!(first, START_TIME.get());
    }

    #[test]
    fn fast_success_should_be_healthy() {
        assert_eq!(
            determine_health_state(&CheckResult::success(3)),
            HealthState::Healthy
        );
    }

    #[test]
    fn slow_success_should_be_degraded() {
        assert_eq!(
            determine_health_state(&CheckResult::success(500)),
            HealthState::Degraded
        );
    }

    #[test]
    fn failure_or_timeout_should_be_unhealthy() {
        let failure = CheckResult::failure(1, "closed".to_string());

        assert_eq!(determine_health_state(&failure), HealthState::Unhealthy);
        assert_eq!(
            determine_health_state(&CheckResult::timeout(2000)),
            HealthState::Unhealthy
        );
    }

    #[tokio::test]
    async fn in_memory_database_should_pass_ping() {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();

        let status = check_health(&db).await;

        assert!(status.checks.database.status);
    }
}
