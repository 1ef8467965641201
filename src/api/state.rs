//! Application state for shared services

use std::sync::Arc;

use crate::domain::{TokenConfig, TokenIssuer, TokenVerifier};
use crate::infrastructure::auth::JwtService;

/// Shared, read-only services handed to every request
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<dyn TokenIssuer>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(issuer: Arc<dyn TokenIssuer>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { issuer, verifier }
    }

    /// Issuer and verifier backed by one HS256 service over `config`
    pub fn from_config(config: Arc<TokenConfig>) -> Self {
        let service = Arc::new(JwtService::new(config));
        Self::new(service.clone(), service)
    }
}
