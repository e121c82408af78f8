//! 서비스 계층 공통 입력 검증
//!
//! DB 호출 전에 실행되어, 잘못된 입력은 저장소에 도달하지 않습니다.

use chrono::NaiveDate;

use super::error::AppError;

/// 이름 필드 최대 길이 (문자 수)
pub const NAME_MAX_LENGTH: usize = 100;

/// 앞뒤 공백을 제거한 뒤 비어 있지 않은지 검증하고, 정리된 값을 반환
pub fn require_text(value: &str, label: &str, max_len: usize) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} skal udfyldes.", label)));
    }

    if trimmed.chars().count() > max_len {
        return Err(AppError::ValidationError(format!(
            "{} må højst være {} tegn.",
            label, max_len
        )));
    }

    Ok(trimmed.to_string())
}

/// 이름 검증 (팀, 선수, 훈련 등)
pub fn require_name(value: &str, label: &str) -> Result<String, AppError> {
    require_text(value, label, NAME_MAX_LENGTH)
}

/// 선택 입력 텍스트: 공백뿐이면 None
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// YYYY-MM-DD 형식 날짜 파싱
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest("Datoen skal have formatet ÅÅÅÅ-MM-DD.".to_string())
    })
}

/// 경로 id 파싱 (숫자가 아니면 400)
pub fn parse_id(value: &str) -> Result<i64, AppError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidPathParam(format!("'{}' er ikke et gyldigt id", value)))
}
