use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    AttendanceResponse, EnrollTeamRequest, RecordAttendanceRequest, SharedTrainingCreateRequest,
    SharedTrainingResponse, SuccessAttendanceListResponse, SuccessSharedTrainingListResponse,
    SuccessTrainingListResponse, SuccessTrainingResponse, TrainingCreateRequest, TrainingResponse,
};
use super::service::TrainingService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::{ActionResult, BaseResponse, ErrorResponse};

/// 팀 훈련 목록 조회 API
///
/// 팀 단독 훈련과 팀이 참여한 공동 훈련을 날짜 내림차순으로 반환합니다.
#[utoipa::path(
    get,
    path = "/api/hold/{team_id}/traeninger",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    responses(
        (status = 200, description = "훈련 목록 조회 성공", body = SuccessTrainingListResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn list_team_trainings(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<Vec<TrainingResponse>>>, AppError> {
    let trainings = TrainingService::list_team_trainings(&state, team_id).await?;

    Ok(Json(BaseResponse::success(trainings)))
}

/// 단독 훈련 생성 API
#[utoipa::path(
    post,
    path = "/api/hold/{team_id}/traeninger",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    request_body = TrainingCreateRequest,
    responses(
        (status = 200, description = "훈련 생성 성공", body = SuccessTrainingResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn create_training(
    State(state): State<AppState>,
    WithRejection(Path(team_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<TrainingCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<TrainingResponse>>, AppError> {
    req.validate()?;

    let training = TrainingService::create_training(&state, team_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        training,
        "Træningen er oprettet.",
    )))
}

/// 공동 훈련 목록 조회 API
///
/// 공동 훈련마다 참여 팀 수(`holdCount`)와 팀 이름 목록(`teamNames`)이 포함됩니다.
#[utoipa::path(
    get,
    path = "/api/traeninger/faelles",
    responses(
        (status = 200, description = "공동 훈련 목록 조회 성공", body = SuccessSharedTrainingListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn list_shared_trainings(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<SharedTrainingResponse>>>, AppError> {
    let trainings = TrainingService::list_shared_trainings(&state).await?;

    Ok(Json(BaseResponse::success(trainings)))
}

/// 공동 훈련 생성 API
#[utoipa::path(
    post,
    path = "/api/traeninger/faelles",
    request_body = SharedTrainingCreateRequest,
    responses(
        (status = 200, description = "공동 훈련 생성 성공", body = SuccessTrainingResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn create_shared_training(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SharedTrainingCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<TrainingResponse>>, AppError> {
    req.validate()?;

    let training = TrainingService::create_shared_training(&state, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        training,
        "Den fælles træning er oprettet.",
    )))
}

/// 공동 훈련 팀 등록 API
#[utoipa::path(
    post,
    path = "/api/traeninger/{training_id}/hold",
    params(
        ("training_id" = i64, Path, description = "훈련 ID")
    ),
    request_body = EnrollTeamRequest,
    responses(
        (status = 200, description = "팀 등록 성공", body = SuccessSharedTrainingListResponse),
        (status = 400, description = "공동 훈련이 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 훈련 또는 팀", body = ErrorResponse),
        (status = 409, description = "이미 등록된 팀", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn enroll_team(
    State(state): State<AppState>,
    WithRejection(Path(training_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<EnrollTeamRequest>, AppError>,
) -> Result<Json<BaseResponse<SharedTrainingResponse>>, AppError> {
    let training = TrainingService::enroll_team(&state, training_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        training,
        "Holdet er tilmeldt.",
    )))
}

/// 훈련 삭제 API
///
/// 실패해도 예외 대신 `{success: false, message}`를 반환합니다.
#[utoipa::path(
    delete,
    path = "/api/traeninger/{training_id}",
    params(
        ("training_id" = i64, Path, description = "훈련 ID")
    ),
    responses(
        (status = 200, description = "훈련 삭제 성공", body = ActionResult),
        (status = 404, description = "존재하지 않는 훈련", body = ActionResult),
        (status = 500, description = "삭제 실패", body = ActionResult)
    ),
    tag = "Training"
)]
pub async fn delete_training(
    State(state): State<AppState>,
    WithRejection(Path(training_id), _): WithRejection<Path<i64>, AppError>,
) -> ActionResult {
    TrainingService::delete_training(&state, training_id).await
}

/// 출석 조회 API
#[utoipa::path(
    get,
    path = "/api/traeninger/{training_id}/fremmoede",
    params(
        ("training_id" = i64, Path, description = "훈련 ID")
    ),
    responses(
        (status = 200, description = "출석 조회 성공", body = SuccessAttendanceListResponse),
        (status = 404, description = "존재하지 않는 훈련", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    WithRejection(Path(training_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<BaseResponse<Vec<AttendanceResponse>>>, AppError> {
    let attendance = TrainingService::get_attendance(&state, training_id).await?;

    Ok(Json(BaseResponse::success(attendance)))
}

/// 출석 기록 API
#[utoipa::path(
    put,
    path = "/api/traeninger/{training_id}/fremmoede",
    params(
        ("training_id" = i64, Path, description = "훈련 ID")
    ),
    request_body = RecordAttendanceRequest,
    responses(
        (status = 200, description = "출석 기록 성공", body = SuccessAttendanceListResponse),
        (status = 400, description = "훈련에 참여하지 않는 선수", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 훈련 또는 선수", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Training"
)]
pub async fn record_attendance(
    State(state): State<AppState>,
    WithRejection(Path(training_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<RecordAttendanceRequest>, AppError>,
) -> Result<Json<BaseResponse<Vec<AttendanceResponse>>>, AppError> {
    let attendance = TrainingService::record_attendance(&state, training_id, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        attendance,
        "Fremmødet er gemt.",
    )))
}
