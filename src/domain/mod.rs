//! Domain layer - token model and the issuer/verifier contracts

pub mod error;
pub mod token;

pub use error::TokenError;
pub use token::{
    bearer_token, Claims, TokenConfig, TokenIssuer, TokenVerifier, Verification, BEARER_SCHEME,
};
