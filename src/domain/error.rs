use thiserror::Error;

/// Errors produced by the token core
#[derive(Debug, Error)]
pub enum TokenError {
    /// Uniform verification failure.
    ///
    /// Missing header, wrong scheme, malformed token, bad signature, disallowed
    /// algorithm and expired claims all collapse into this variant. The
    /// underlying cause, when there is one, is only exposed through
    /// [`std::error::Error::source`].
    #[error("invalid token")]
    InvalidToken {
        #[source]
        source: Option<jsonwebtoken::errors::Error>,
    },

    /// Claims could not be serialized or signed
    #[error("failed to issue token")]
    Issuance {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

impl TokenError {
    pub fn invalid() -> Self {
        Self::InvalidToken { source: None }
    }

    pub fn invalid_with(source: jsonwebtoken::errors::Error) -> Self {
        Self::InvalidToken {
            source: Some(source),
        }
    }

    pub fn issuance(source: jsonwebtoken::errors::Error) -> Self {
        Self::Issuance { source }
    }

    pub fn is_invalid_token(&self) -> bool {
        matches!(self, Self::InvalidToken { .. })
    }
}
