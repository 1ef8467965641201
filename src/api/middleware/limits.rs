//! Request size limits

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::types::ApiError;

/// Upper bound on the summed size of request header names and values
pub const MAX_HEADER_BYTES: usize = 1 << 20;

/// Reject requests whose headers exceed [`MAX_HEADER_BYTES`] with 431
pub async fn header_limit_middleware(request: Request<Body>, next: Next) -> Response {
    let size = header_bytes(request.headers());
    if size > MAX_HEADER_BYTES {
        warn!(
            header_bytes = size,
            limit = MAX_HEADER_BYTES,
            "Request headers too large"
        );
        return ApiError::invalid_request(
            StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
            "request headers too large",
        )
        .into_response();
    }

    next.run(request).await
}

fn header_bytes(headers: &HeaderMap) -> usize {
    headers
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len())
        .sum()
}
