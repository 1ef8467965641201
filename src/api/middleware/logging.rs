//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::domain::BEARER_SCHEME;

/// Log one event per completed request. The `Authorization` value is never
/// logged, only which scheme the caller presented.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(request.headers());
    let auth = authorization_kind(request.headers());

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        auth = auth,
        "Request completed"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Redacted description of the `Authorization` header
fn authorization_kind(headers: &HeaderMap) -> &'static str {
    match headers.get(header::AUTHORIZATION).map(|v| v.to_str()) {
        None => "none",
        Some(Ok(value)) if value.split_whitespace().next() == Some(BEARER_SCHEME) => "bearer",
        Some(_) => "other",
    }
}
