//! API layer - HTTP endpoints and middleware

pub mod middleware;
pub mod router;
pub mod state;
pub mod token;
pub mod types;

pub use middleware::RequestVerification;
pub use router::{create_app, create_router};
pub use state::AppState;
