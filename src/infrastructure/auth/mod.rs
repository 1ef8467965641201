//! Authentication infrastructure module
//!
//! This module provides HMAC-signed JWT issuance and verification.

mod jwt;

pub use jwt::{JwtService, SIGNING_ALGORITHM};
