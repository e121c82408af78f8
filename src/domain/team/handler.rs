use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    DeleteTeamResponse, SuccessDeleteTeamResponse, SuccessTeamDetailResponse,
    SuccessTeamListResponse, SuccessTeamResponse, TeamCreateRequest, TeamDetailResponse,
    TeamResponse, TeamUpdateRequest,
};
use super::service::TeamService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::{BaseResponse, ErrorResponse};

/// 팀 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/hold",
    responses(
        (status = 200, description = "팀 목록 조회 성공", body = SuccessTeamListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<TeamResponse>>>, AppError> {
    let teams = TeamService::list_teams(&state).await?;

    Ok(Json(BaseResponse::success(teams)))
}

/// 팀 생성 API
///
/// 이름은 앞뒤 공백을 제거한 뒤 비어 있을 수 없습니다.
#[utoipa::path(
    post,
    path = "/api/hold",
    request_body = TeamCreateRequest,
    responses(
        (status = 200, description = "팀 생성 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn create_team(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<TeamCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let team = TeamService::create_team(&state, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        team,
        "Holdet er oprettet.",
    )))
}

/// 팀 상세 조회 API (선수 목록 포함)
#[utoipa::path(
    get,
    path = "/api/hold/{team_id}",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    responses(
        (status = 200, description = "팀 조회 성공", body = SuccessTeamDetailResponse),
        (status = 400, description = "잘못된 팀 ID", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn get_team(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<TeamDetailResponse>>, AppError> {
    let team = TeamService::get_team_detail(&state, team_id).await?;

    Ok(Json(BaseResponse::success(team)))
}

/// 팀 이름 변경 API
#[utoipa::path(
    put,
    path = "/api/hold/{team_id}",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    request_body = TeamUpdateRequest,
    responses(
        (status = 200, description = "팀 수정 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn update_team(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<TeamUpdateRequest>, AppError>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let team = TeamService::update_team(&state, team_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        team,
        "Holdet er opdateret.",
    )))
}

/// 팀 삭제 API
///
/// 팀에 속한 선수와 훈련 연결도 함께 삭제되며 복구할 수 없습니다.
#[utoipa::path(
    delete,
    path = "/api/hold/{team_id}",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    responses(
        (status = 200, description = "팀 삭제 성공", body = SuccessDeleteTeamResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<DeleteTeamResponse>>, AppError> {
    let result = TeamService::delete_team(&state, team_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "Holdet er slettet.",
    )))
}
