//! HTTP Middleware
//!
//! 请求日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求日志中间件
///
/// 成功请求记 debug，4xx 记 warn，5xx 记 error，均带耗时
/// 注意：错误原因在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP request handled"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{create_routes, AppState};

    fn create_test_router() -> Router {
        create_routes()
            .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(request_logging_middleware))
            .with_state(Arc::new(AppState::in_memory()))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_through_ok_response() {
        assert_eq!(status_of("GET", "/blogs").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_through_client_error() {
        assert_eq!(status_of("DELETE", "/blogs/999").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_passes_through_server_error() {
        assert_eq!(
            status_of("GET", "/boom").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
