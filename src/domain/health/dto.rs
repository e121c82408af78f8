use serde::Serialize;
use utoipa::ToSchema;

/// 전체 헬스 상태 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// 서버 상태 (healthy/degraded/unhealthy)
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    pub checks: HealthChecks,
}

#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// 응답은 하지만 느린 상태
    Degraded,
    Unhealthy,
}

/// 의존성 체크 결과 모음
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    /// SQLite 연결 상태
    pub database: CheckResult,
}

/// 개별 체크 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[schema(example = true)]
    pub status: bool,
    /// 응답 지연 시간 (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub latency_ms: Option<u64>,
    /// 에러 메시지 (실패 시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(latency_ms: u64) -> Self {
        Self {
            status: true,
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    pub fn failure(latency_ms: u64, error: String) -> Self {
        Self {
            status: false,
            latency_ms: Some(latency_ms),
            error: Some(error),
        }
    }

    pub fn timeout(limit_ms: u64) -> Self {
        Self {
            status: false,
            latency_ms: Some(limit_ms),
            error: Some("Timeout".to_string()),
        }
    }
}
