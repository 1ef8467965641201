//! Token endpoints
//!
//! `POST /tokenize` mints a token around an arbitrary JSON body and
//! `GET /validate` reports what the verification middleware found.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::api::middleware::RequestVerification;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Verification;

/// Create the token router
pub fn create_token_router() -> Router<AppState> {
    Router::new()
        .route("/tokenize", post(tokenize))
        .route("/validate", get(validate))
}

#[derive(Debug, Default)]
pub struct TokenizeParams {
    pub raw: Option<String>,
}

/// Repeated keys resolve to their first occurrence
impl From<Vec<(String, String)>> for TokenizeParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let raw = pairs
            .into_iter()
            .find(|(key, _)| key == "raw")
            .map(|(_, value)| value);

        Self { raw }
    }
}

impl TokenizeParams {
    /// `?raw=true` asks for the bare token as `text/plain`
    pub fn wants_raw(&self) -> bool {
        self.raw.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a token embedding the request body
///
/// POST /tokenize
pub async fn tokenize(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let params = TokenizeParams::from(query);

    let body = body.map_err(|e| {
        error!(step = "read_body", error = %e, "Token issuance failed");
        ApiError::internal(e.body_text())
    })?;

    let data: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(step = "parse_body", error = %e, "Token issuance failed");
        ApiError::internal(e.to_string())
    })?;

    let token = state.issuer.issue(data).map_err(|e| {
        error!(step = "issue_token", error = %e, "Token issuance failed");
        ApiError::from(e)
    })?;

    if params.wants_raw() {
        return Ok(([(header::CONTENT_TYPE, "text/plain")], token).into_response());
    }

    Ok(Json(TokenResponse { token }).into_response())
}

/// Report the verification result for the current request
///
/// GET /validate
pub async fn validate(RequestVerification(verification): RequestVerification) -> Json<Verification> {
    Json(verification)
}
