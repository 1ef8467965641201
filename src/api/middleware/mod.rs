//! API middleware components

pub mod limits;
pub mod logging;
pub mod verification;

pub use limits::{header_limit_middleware, MAX_HEADER_BYTES};
pub use logging::logging_middleware;
pub use verification::{verification_middleware, RequestVerification};
