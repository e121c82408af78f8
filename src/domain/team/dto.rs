use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::team;
use crate::domain::player::dto::PlayerResponse;
use crate::utils::format::format_datetime;

// ============== 팀 생성 / 이름 변경 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreateRequest {
    #[validate(length(max = 100, message = "Holdnavnet må højst være 100 tegn."))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdateRequest {
    #[validate(length(max = 100, message = "Holdnavnet må højst være 100 tegn."))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<team::Model> for TeamResponse {
    fn from(model: team::Model) -> Self {
        Self {
            team_id: model.team_id,
            name: model.name,
            created_at: format_datetime(model.created_at),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TeamResponse>,
}

// ============== 팀 상세 (선수 포함) ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailResponse {
    pub team_id: i64,
    pub name: String,
    pub created_at: String,
    pub players: Vec<PlayerResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamDetailResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamDetailResponse,
}

// ============== 팀 삭제 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTeamResponse {
    pub team_id: i64,
    pub deleted_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteTeamResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteTeamResponse,
}
