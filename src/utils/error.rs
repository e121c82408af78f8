use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};
use validator::ValidationErrors;

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    JsonParseFailed(String),
    InvalidPathParam(String),
    TeamNotFound(String),
    PlayerNotFound(String),
    TrainingNotFound(String),
    ExerciseNotFound(String),
    NotFound(String),
    Conflict(String),
    InternalError(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("Ugyldigt anmodningsformat: {}", msg),
            AppError::InvalidPathParam(msg) => format!("Ugyldig parameter: {}", msg),
            AppError::TeamNotFound(msg) => msg.clone(),
            AppError::PlayerNotFound(msg) => msg.clone(),
            AppError::TrainingNotFound(msg) => msg.clone(),
            AppError::ExerciseNotFound(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            // 내부 에러 상세는 로그에만 남기고 클라이언트에는 일반 메시지만 노출
            AppError::InternalError(_) => "Der opstod en fejl. Prøv igen.".to_string(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::InvalidPathParam(_) => "COMMON400",
            AppError::TeamNotFound(_) => "TEAM4041",
            AppError::PlayerNotFound(_) => "PLAYER4041",
            AppError::TrainingNotFound(_) => "TRAINING4041",
            AppError::ExerciseNotFound(_) => "EXERCISE4041",
            AppError::NotFound(_) => "COMMON404",
            AppError::Conflict(_) => "COMMON409",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::InvalidPathParam(_) => StatusCode::BAD_REQUEST,
            AppError::TeamNotFound(_)
            | AppError::PlayerNotFound(_)
            | AppError::TrainingNotFound(_)
            | AppError::ExerciseNotFound(_)
            | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(detail) => {
                error!(code = %error_code, "Internal Server Error: {}", detail);
            }
            _ => {
                warn!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// PathRejection을 AppError로 변환 (숫자가 아닌 id 등)
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPathParam(rejection.body_text())
    }
}

/// validator 검증 실패를 첫 번째 메시지 기준으로 변환
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Ugyldige data.".to_string());

        AppError::ValidationError(message)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl AppError {
    /// 저장 실패 변환: 유니크 제약 위반은 409, 그 외는 500
    ///
    /// 존재 여부를 먼저 확인한 뒤 저장하는 흐름에서, 동시 요청이 먼저 저장한 경우에도 409를 돌려줍니다.
    pub fn conflict_or_internal(err: DbErr, conflict_message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.into())
            }
            _ => AppError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_not_found_variants_to_404() {
        assert_eq!(
            AppError::TeamNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ExerciseNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::TeamNotFound("x".into()).error_code(), "TEAM4041");
    }

    #[test]
    fn should_hide_internal_error_detail_from_message() {
        let err = AppError::InternalError("UNIQUE constraint failed: team.name".to_string());

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("UNIQUE"));
    }

    #[test]
    fn should_convert_db_error_to_internal_error() {
        let err: AppError = DbErr::Custom("boom".to_string()).into();

        assert!(matches!(err, AppError::InternalError(ref m) if m.contains("boom")));
    }

    #[test]
    fn non_constraint_error_should_stay_internal() {
        let err = AppError::conflict_or_internal(DbErr::Custom("disk".to_string()), "findes");

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
