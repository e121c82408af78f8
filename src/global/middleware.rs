use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{info, Instrument};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// 요청 추적 ID (요청 extension에 저장)
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청마다 `x-request-id`를 부여하고, 요청 단위 span 안에서 처리 시간을 기록
///
/// 클라이언트가 보낸 `x-request-id`가 있으면 그대로 사용합니다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            duration_ms = duration_ms,
            status = response.status().as_u16(),
            "요청 처리 완료"
        );

        let header = HeaderValue::from_str(&request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
        response.headers_mut().insert(REQUEST_ID_HEADER, header);
        response
    }
    .instrument(span)
    .await
}
