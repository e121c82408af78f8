use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    DeletePlayerResponse, PlayerCreateRequest, PlayerPositionsRequest, PlayerResponse,
    PlayerUpdateRequest, SuccessDeletePlayerResponse, SuccessPlayerListResponse,
    SuccessPlayerResponse,
};
use super::service::PlayerService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::{BaseResponse, ErrorResponse};

/// 팀 선수 목록 조회 API
///
/// 선수마다 공격/수비 포지션 목록(`{position, isPrimary}`)이 포함됩니다.
#[utoipa::path(
    get,
    path = "/api/hold/{team_id}/spillere",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    responses(
        (status = 200, description = "선수 목록 조회 성공", body = SuccessPlayerListResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Player"
)]
pub async fn list_players(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<Vec<PlayerResponse>>>, AppError> {
    let players = PlayerService::list_players(&state, team_id).await?;

    Ok(Json(BaseResponse::success(players)))
}

/// 선수 생성 API
#[utoipa::path(
    post,
    path = "/api/hold/{team_id}/spillere",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    request_body = PlayerCreateRequest,
    responses(
        (status = 200, description = "선수 생성 성공", body = SuccessPlayerResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Player"
)]
pub async fn create_player(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<PlayerCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<PlayerResponse>>, AppError> {
    req.validate()?;

    let player = PlayerService::create_player(&state, team_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        player,
        "Spilleren er oprettet.",
    )))
}

/// 선수 정보 수정 API
#[utoipa::path(
    put,
    path = "/api/spillere/{player_id}",
    params(
        ("player_id" = i64, Path, description = "선수 ID")
    ),
    request_body = PlayerUpdateRequest,
    responses(
        (status = 200, description = "선수 수정 성공", body = SuccessPlayerResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 선수", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Player"
)]
pub async fn update_player(
    State(state): State<AppState>,
    WithRejection(Path(player_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<PlayerUpdateRequest>, AppError>,
) -> Result<Json<BaseResponse<PlayerResponse>>, AppError> {
    req.validate()?;

    let player = PlayerService::update_player(&state, player_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        player,
        "Spilleren er opdateret.",
    )))
}

/// 선수 포지션 교체 API
#[utoipa::path(
    put,
    path = "/api/spillere/{player_id}/positioner",
    params(
        ("player_id" = i64, Path, description = "선수 ID")
    ),
    request_body = PlayerPositionsRequest,
    responses(
        (status = 200, description = "포지션 변경 성공", body = SuccessPlayerResponse),
        (status = 400, description = "잘못된 포지션", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 선수", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Player"
)]
pub async fn set_player_positions(
    State(state): State<AppState>,
    WithRejection(Path(player_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<PlayerPositionsRequest>, AppError>,
) -> Result<Json<BaseResponse<PlayerResponse>>, AppError> {
    let player = PlayerService::set_player_positions(&state, player_id, req).await?;

    Ok(Json(BaseResponse::success(player)))
}

/// 선수 삭제 API
#[utoipa::path(
    delete,
    path = "/api/spillere/{player_id}",
    params(
        ("player_id" = i64, Path, description = "선수 ID")
    ),
    responses(
        (status = 200, description = "선수 삭제 성공", body = SuccessDeletePlayerResponse),
        (status = 404, description = "존재하지 않는 선수", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Player"
)]
pub async fn delete_player(
    State(state): State<AppState>,
    WithRejection(Path(player_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<DeletePlayerResponse>>, AppError> {
    let result = PlayerService::delete_player(&state, player_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "Spilleren er slettet.",
    )))
}
