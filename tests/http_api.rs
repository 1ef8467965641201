use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use token_server::api::middleware::MAX_HEADER_BYTES;
use token_server::api::{create_app, create_router, token, AppState};
use token_server::{JwtService, TokenConfig, TokenIssuer};
use tower::util::ServiceExt;

fn token_config() -> Arc<TokenConfig> {
    Arc::new(TokenConfig::new("somekey", 1))
}

fn app() -> Router {
    create_router(AppState::from_config(token_config()))
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

async fn tokenize(body: &str) -> String {
    let response = app()
        .oneshot(
            Request::post("/tokenize")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .expect("token field")
        .to_string()
}

async fn validate(authorization: Option<&str>) -> Value {
    let mut request = Request::get("/validate");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    let response = app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn tokenize_then_validate_round_trip() {
    let token = tokenize(r#"{"user":"alice"}"#).await;

    let before = Utc::now().timestamp();
    let result = validate(Some(&format!("Bearer {}", token))).await;

    assert_eq!(result["valid"], true);
    assert_eq!(result["error"], Value::Null);
    assert_eq!(result["claims"]["data"]["user"], "alice");

    let exp = result["claims"]["exp"].as_i64().unwrap();
    assert!((exp - (before + 60)).abs() <= 2, "exp {} not ~60s ahead", exp);
}

#[tokio::test]
async fn tokenize_raw_returns_plain_text() {
    let response = app()
        .oneshot(
            Request::post("/tokenize?raw=true")
                .body(Body::from(r#"{"user":"alice"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );

    let token = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let result = validate(Some(&format!("Bearer {}", token))).await;
    assert_eq!(result["valid"], true);
}

#[tokio::test]
async fn tokenize_rejects_invalid_json_with_server_error() {
    let response = app()
        .oneshot(
            Request::post("/tokenize")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "server_error");
}

#[tokio::test]
async fn tokenize_ignores_presented_credentials() {
    let response = app()
        .oneshot(
            Request::post("/tokenize")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::from(r#"["any", "json"]"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn validate_reports_invalid_headers() {
    for header_value in [None, Some(""), Some("Bearer"), Some("Basic abc123"), Some("Bearer ")] {
        let result = validate(header_value).await;

        assert_eq!(result["valid"], false, "header {:?}", header_value);
        assert_eq!(result["claims"], Value::Null);
        assert_eq!(result["error"], "invalid token");
    }
}

#[tokio::test]
async fn validate_reports_tokens_signed_with_another_key() {
    let other = JwtService::new(Arc::new(TokenConfig::new("otherkey", 1)));
    let token = other.issue(json!({"user": "alice"})).unwrap();

    let result = validate(Some(&format!("Bearer {}", token))).await;
    assert_eq!(result["valid"], false);
    assert_eq!(result["error"], "invalid token");
}

#[tokio::test]
async fn validate_reports_expired_tokens() {
    let service = JwtService::new(token_config());
    let issued_61s_ago = Utc::now() - Duration::seconds(61);
    let token = service
        .issue_at(json!({"user": "alice"}), issued_61s_ago)
        .unwrap();

    let result = validate(Some(&format!("Bearer {}", token))).await;
    assert_eq!(result["valid"], false);
    assert_eq!(result["claims"], Value::Null);
}

#[tokio::test]
async fn validate_without_verification_middleware_is_server_error() {
    let unwired: Router = Router::new().route("/validate", get(token::validate));

    let response = unwired
        .oneshot(Request::get("/validate").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn tokenize_uses_first_raw_query_value() {
    let response = app()
        .oneshot(
            Request::post("/tokenize?raw=true&raw=false")
                .body(Body::from(r#"{"user":"alice"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );

    let response = app()
        .oneshot(
            Request::post("/tokenize?raw=false&raw=true")
                .body(Body::from(r#"{"user":"alice"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["token"].is_string());
}

#[tokio::test]
async fn oversized_headers_are_rejected() {
    let app = create_app(
        AppState::from_config(token_config()),
        std::time::Duration::from_secs(10),
    );
    let oversized = "a".repeat(MAX_HEADER_BYTES + 1);

    let response = app
        .oneshot(
            Request::get("/validate")
                .header("x-padding", oversized)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
    assert_eq!(body_json(response).await["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn served_app_validates_within_header_limit() {
    let token = tokenize(r#"{"user":"alice"}"#).await;
    let app = create_app(
        AppState::from_config(token_config()),
        std::time::Duration::from_secs(10),
    );

    let response = app
        .oneshot(
            Request::get("/validate")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["valid"], true);
}
