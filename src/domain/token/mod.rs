//! Token lifecycle: claims construction, issuance and bearer verification

mod bearer;
mod claims;
mod config;
mod verification;

pub use bearer::{bearer_token, BEARER_SCHEME};
pub use claims::Claims;
pub use config::TokenConfig;
pub use verification::Verification;

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::TokenError;

/// Mints signed tokens embedding caller-supplied data
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a token as if the current time were `issued_at`
    fn issue_at(&self, data: Value, issued_at: DateTime<Utc>) -> Result<String, TokenError>;

    /// Issue a token expiring `expiration_minutes` from now
    fn issue(&self, data: Value) -> Result<String, TokenError> {
        self.issue_at(data, Utc::now())
    }
}

/// Checks presented tokens and returns their claims
pub trait TokenVerifier: Send + Sync + Debug {
    /// Verify a bare token string: structure, algorithm, signature and expiry
    fn verify_token(&self, token: &str) -> Result<Claims, TokenError>;

    /// Verify the value of an `Authorization` header.
    ///
    /// Every failure, including a missing or malformed header, is reported as
    /// [`TokenError::InvalidToken`].
    fn verify(&self, authorization: Option<&str>) -> Result<Claims, TokenError> {
        let token = bearer_token(authorization).ok_or_else(TokenError::invalid)?;
        self.verify_token(token)
    }
}
