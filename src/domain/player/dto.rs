use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::position::{DefensivePosition, OffensivePosition};

/// 공격 포지션 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OffensivePositionItem {
    pub position: OffensivePosition,
    #[serde(default)]
    pub is_primary: bool,
}

/// 수비 포지션 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefensivePositionItem {
    pub position: DefensivePosition,
    #[serde(default)]
    pub is_primary: bool,
}

/// 선수 응답 (포지션 목록 포함)
///
/// 골키퍼는 포지션이 저장되어 있어도 빈 목록으로 내려갑니다.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player_id: i64,
    pub team_id: i64,
    pub name: String,
    pub jersey_number: Option<i32>,
    pub is_goalkeeper: bool,
    pub created_at: String,
    pub offensive_positions: Vec<OffensivePositionItem>,
    pub defensive_positions: Vec<DefensivePositionItem>,
}

// ============== 선수 생성 / 수정 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCreateRequest {
    #[validate(length(max = 100, message = "Navnet må højst være 100 tegn."))]
    pub name: String,

    #[validate(range(min = 0, max = 99, message = "Trøjenummeret skal være mellem 0 og 99."))]
    pub jersey_number: Option<i32>,

    #[serde(default)]
    pub is_goalkeeper: bool,

    #[serde(default)]
    pub offensive_positions: Vec<OffensivePositionItem>,

    #[serde(default)]
    pub defensive_positions: Vec<DefensivePositionItem>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdateRequest {
    #[validate(length(max = 100, message = "Navnet må højst være 100 tegn."))]
    pub name: String,

    #[validate(range(min = 0, max = 99, message = "Trøjenummeret skal være mellem 0 og 99."))]
    pub jersey_number: Option<i32>,

    #[serde(default)]
    pub is_goalkeeper: bool,
}

/// 포지션 전체 교체 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPositionsRequest {
    #[serde(default)]
    pub offensive_positions: Vec<OffensivePositionItem>,

    #[serde(default)]
    pub defensive_positions: Vec<DefensivePositionItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: PlayerResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<PlayerResponse>,
}

// ============== 선수 삭제 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayerResponse {
    pub player_id: i64,
    pub team_id: i64,
    pub deleted_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeletePlayerResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeletePlayerResponse,
}
