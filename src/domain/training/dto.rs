use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::training;
use crate::utils::format::{format_date, format_datetime};

// ============== 훈련 생성 ==============

/// 단독 훈련 생성 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCreateRequest {
    #[validate(length(max = 100, message = "Navnet må højst være 100 tegn."))]
    pub name: String,

    #[validate(length(max = 1000, message = "Beskrivelsen må højst være 1000 tegn."))]
    pub description: Option<String>,

    /// YYYY-MM-DD
    #[schema(example = "2026-03-14")]
    pub date: String,
}

/// 공동 훈련 생성 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedTrainingCreateRequest {
    #[validate(length(max = 100, message = "Navnet må højst være 100 tegn."))]
    pub name: String,

    #[validate(length(max = 1000, message = "Beskrivelsen må højst være 1000 tegn."))]
    pub description: Option<String>,

    /// YYYY-MM-DD
    #[schema(example = "2026-03-14")]
    pub date: String,

    /// 참여 팀 ID 목록 (비어 있어도 됨)
    #[serde(default)]
    pub team_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollTeamRequest {
    pub team_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResponse {
    pub training_id: i64,
    pub team_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub is_shared: bool,
    pub created_at: String,
}

impl From<training::Model> for TrainingResponse {
    fn from(model: training::Model) -> Self {
        Self {
            training_id: model.training_id,
            team_id: model.team_id,
            name: model.name,
            description: model.description,
            date: format_date(model.date),
            is_shared: model.is_shared,
            created_at: format_datetime(model.created_at),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTrainingResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TrainingResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTrainingListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TrainingResponse>,
}

// ============== 공동 훈련 목록 ==============

/// 공동 훈련 목록 항목
///
/// `holdCount`는 연결된 팀 수(연결 행 수)이며 `teamNames`의 길이와 같습니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedTrainingResponse {
    pub training_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
    pub hold_count: i64,
    pub team_names: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSharedTrainingListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<SharedTrainingResponse>,
}

// ============== 출석 ==============

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub player_id: i64,
    pub present: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub entries: Vec<AttendanceEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub player_id: i64,
    pub player_name: String,
    pub team_id: i64,
    pub present: bool,
    pub recorded_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessAttendanceListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<AttendanceResponse>,
}
