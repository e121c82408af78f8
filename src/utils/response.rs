use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::AppError;

/// API 기본 응답 구조체
///
/// 형식:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "OK",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 성공 응답 생성
    pub fn success(result: T) -> Self {
        Self::success_with_message(result, "OK")
    }

    /// 메시지를 지정한 성공 응답 생성
    pub fn success_with_message(result: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: message.into(),
            result: Some(result),
        }
    }
}

/// 에러 응답 구조체
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

/// 예외를 전파하지 않고 인라인으로 표시하는 작업 결과 (`{success, message}`)
///
/// DB 초기화, 훈련 삭제처럼 실패를 호출자에게 구조화된 값으로 돌려주는 작업에 사용합니다.
/// HTTP 상태는 본문에 포함되지 않고 응답 상태 코드로만 쓰입니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            status: StatusCode::OK,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러를 사용자용 메시지와 상태 코드로 변환
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.message(),
            status: err.status_code(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
