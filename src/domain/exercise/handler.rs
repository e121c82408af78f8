use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    CategoryCreateRequest, CategoryResponse, DeleteExerciseResponse, ExerciseCreateRequest,
    ExerciseResponse, ExerciseSummaryResponse, FocusPointCreateRequest, FocusPointResponse,
    SuccessCategoryListResponse, SuccessCategoryResponse, SuccessDeleteExerciseResponse,
    SuccessExerciseListResponse, SuccessExerciseResponse, SuccessFocusPointListResponse,
    SuccessFocusPointResponse,
};
use super::service::ExerciseService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::validation::parse_id;
use crate::utils::{BaseResponse, ErrorResponse};

/// 과제 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/oevelser",
    responses(
        (status = 200, description = "과제 목록 조회 성공", body = SuccessExerciseListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn list_exercises(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<ExerciseSummaryResponse>>>, AppError> {
    let exercises = ExerciseService::list_exercises(&state).await?;

    Ok(Json(BaseResponse::success(exercises)))
}

/// 과제 상세 조회 API
///
/// 봉투 없이 과제 객체를 그대로 반환합니다. 숫자가 아닌 id는 400입니다.
#[utoipa::path(
    get,
    path = "/api/oevelser/{id}",
    params(
        ("id" = String, Path, description = "과제 ID (숫자)")
    ),
    responses(
        (status = 200, description = "과제 조회 성공", body = ExerciseResponse),
        (status = 400, description = "숫자가 아닌 id", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 과제", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let exercise_id = parse_id(&id)?;

    let exercise = ExerciseService::get_exercise(&state, exercise_id).await?;

    Ok(Json(exercise))
}

/// 과제 생성 API
#[utoipa::path(
    post,
    path = "/api/oevelser",
    request_body = ExerciseCreateRequest,
    responses(
        (status = 200, description = "과제 생성 성공", body = SuccessExerciseResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 카테고리 또는 포커스 포인트", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<ExerciseCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<ExerciseResponse>>, AppError> {
    req.validate()?;

    let exercise = ExerciseService::create_exercise(&state, req).await?;

    Ok(Json(BaseResponse::success_with_message(
        exercise,
        "Øvelsen er oprettet.",
    )))
}

/// 과제 삭제 API
#[utoipa::path(
    delete,
    path = "/api/oevelser/{id}",
    params(
        ("id" = String, Path, description = "과제 ID (숫자)")
    ),
    responses(
        (status = 200, description = "과제 삭제 성공", body = SuccessDeleteExerciseResponse),
        (status = 400, description = "숫자가 아닌 id", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 과제", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn delete_exercise(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> Result<Json<BaseResponse<DeleteExerciseResponse>>, AppError> {
    let exercise_id = parse_id(&id)?;

    let result = ExerciseService::delete_exercise(&state, exercise_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "Øvelsen er slettet.",
    )))
}

/// 카테고리 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/kategorier",
    responses(
        (status = 200, description = "카테고리 목록 조회 성공", body = SuccessCategoryListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<CategoryResponse>>>, AppError> {
    let categories = ExerciseService::list_categories(&state).await?;

    Ok(Json(BaseResponse::success(categories)))
}

/// 카테고리 생성 API
#[utoipa::path(
    post,
    path = "/api/kategorier",
    request_body = CategoryCreateRequest,
    responses(
        (status = 200, description = "카테고리 생성 성공", body = SuccessCategoryResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 409, description = "이미 존재하는 카테고리", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn create_category(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CategoryCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<CategoryResponse>>, AppError> {
    req.validate()?;

    let category = ExerciseService::create_category(&state, req).await?;

    Ok(Json(BaseResponse::success(category)))
}

/// 포커스 포인트 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/fokuspunkter",
    responses(
        (status = 200, description = "포커스 포인트 목록 조회 성공", body = SuccessFocusPointListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn list_focus_points(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<FocusPointResponse>>>, AppError> {
    let focus_points = ExerciseService::list_focus_points(&state).await?;

    Ok(Json(BaseResponse::success(focus_points)))
}

/// 포커스 포인트 생성 API
#[utoipa::path(
    post,
    path = "/api/fokuspunkter",
    request_body = FocusPointCreateRequest,
    responses(
        (status = 200, description = "포커스 포인트 생성 성공", body = SuccessFocusPointResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 409, description = "이미 존재하는 포커스 포인트", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Exercise"
)]
pub async fn create_focus_point(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<FocusPointCreateRequest>, AppError>,
) -> Result<Json<BaseResponse<FocusPointResponse>>, AppError> {
    req.validate()?;

    let focus_point = ExerciseService::create_focus_point(&state, req).await?;

    Ok(Json(BaseResponse::success(focus_point)))
}
