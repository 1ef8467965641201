//! Infrastructure layer - Signing backend and process-level plumbing

pub mod auth;
pub mod logging;
