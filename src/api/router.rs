use std::time::Duration;

use axum::{http::StatusCode, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::middleware::{header_limit_middleware, logging_middleware, verification_middleware};
use super::state::AppState;
use super::token;

/// Create the token routes with the verification middleware in front of every
/// route, `/tokenize` included
pub fn create_router(state: AppState) -> Router {
    token::create_token_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            verification_middleware,
        ))
        .with_state(state)
}

/// Create the served application: routes plus tracing, request logging, the
/// header size limit and a per-request timeout
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    with_http_layers(create_router(state), request_timeout)
}

/// Wrap `router` in the layers shared by every served route. Requests still
/// running after `request_timeout` get 408.
pub fn with_http_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(logging_middleware))
            .layer(middleware::from_fn(header_limit_middleware))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}
