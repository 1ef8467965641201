//! HS256 token issuance and verification

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Claims, TokenConfig, TokenError, TokenIssuer, TokenVerifier};

/// Algorithm used to sign issued tokens
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Algorithms a presented token may declare. Anything outside the HMAC family
/// is rejected before the signature is checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT service implementation using a shared secret
#[derive(Clone)]
pub struct JwtService {
    config: Arc<TokenConfig>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: Arc<TokenConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.signing_key());
        let decoding_key = DecodingKey::from_secret(config.signing_key());

        Self {
            config,
            encoding_key,
            decoding_key,
            validation: validation(),
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }
}

/// `exp` is required and checked with no leeway, so a token stops verifying
/// as soon as the second it expires in has passed.
fn validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation
}

impl TokenIssuer for JwtService {
    fn issue_at(&self, data: Value, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::new(data, issued_at, &self.config);

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::issuance)
    }
}

impl TokenVerifier for JwtService {
    fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::invalid());
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(cause = %e, "Token verification failed");
                TokenError::invalid_with(e)
            })?;

        Ok(token_data.claims)
    }
}
