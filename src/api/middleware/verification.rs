//! Per-request token verification
//!
//! Every request is verified exactly once, before it reaches a handler. The
//! outcome is stored as a typed request extension and the request always
//! continues: deciding what an invalid token means is left to the handler.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Verification;

/// Verify the `Authorization` header and attach the [`Verification`] to the request
pub async fn verification_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let verification = Verification::from(state.verifier.verify(authorization));
    request.extensions_mut().insert(verification);

    next.run(request).await
}

/// Extractor for the verification attached by [`verification_middleware`].
///
/// Rejects with a 500 when the middleware was not installed on the route.
#[derive(Debug, Clone)]
pub struct RequestVerification(pub Verification);

impl<S> FromRequestParts<S> for RequestVerification
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Verification>()
            .cloned()
            .map(RequestVerification)
            .ok_or_else(|| {
                error!(path = %parts.uri.path(), "Token verification missing from request");
                ApiError::internal("unable to get token verification")
            })
    }
}
