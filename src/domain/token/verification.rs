use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::Claims;
use crate::domain::TokenError;

/// Outcome of one verification attempt, attached to the request it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub claims: Option<Claims>,
    pub valid: bool,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<Arc<TokenError>>,
}

impl Verification {
    pub fn valid(claims: Claims) -> Self {
        Self {
            claims: Some(claims),
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: TokenError) -> Self {
        Self {
            claims: None,
            valid: false,
            error: Some(Arc::new(error)),
        }
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn error(&self) -> Option<&TokenError> {
        self.error.as_deref()
    }
}

impl From<Result<Claims, TokenError>> for Verification {
    fn from(result: Result<Claims, TokenError>) -> Self {
        match result {
            Ok(claims) => Self::valid(claims),
            Err(error) => Self::invalid(error),
        }
    }
}

fn serialize_error<S>(error: &Option<Arc<TokenError>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}
