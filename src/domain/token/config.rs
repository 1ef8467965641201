use std::fmt;

use chrono::Duration;

const DEFAULT_SIGNING_KEY: &str = "somekey";
const DEFAULT_EXPIRATION_MINUTES: u32 = 1;

/// Immutable signing configuration shared by the issuer and the verifier
#[derive(Clone, PartialEq, Eq)]
pub struct TokenConfig {
    signing_key: Vec<u8>,
    expiration_minutes: u32,
}

impl TokenConfig {
    pub fn new(signing_key: impl Into<Vec<u8>>, expiration_minutes: u32) -> Self {
        Self {
            signing_key: signing_key.into(),
            expiration_minutes,
        }
    }

    pub fn signing_key(&self) -> &[u8] {
        &self.signing_key
    }

    pub fn expiration_minutes(&self) -> u32 {
        self.expiration_minutes
    }

    /// Lifetime of an issued token
    pub fn expiration(&self) -> Duration {
        Duration::minutes(i64::from(self.expiration_minutes))
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNING_KEY, DEFAULT_EXPIRATION_MINUTES)
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("signing_key", &"[hidden]")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}
