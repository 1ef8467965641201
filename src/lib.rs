//! Token Server
//!
//! Issues and validates signed, time-limited bearer tokens:
//! - `POST /tokenize` wraps an arbitrary JSON body into an HS256 token
//! - every request is verified from its `Authorization: Bearer` header
//! - `GET /validate` reports the verification result

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{Claims, TokenConfig, TokenError, TokenIssuer, TokenVerifier, Verification};
pub use infrastructure::auth::JwtService;
