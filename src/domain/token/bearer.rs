/// Authorization scheme accepted by the verifier
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// Only `Bearer <token>` is accepted. A missing header, another scheme, or a
/// value with missing or extra whitespace-separated segments yields `None`.
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    let mut segments = authorization?.split_whitespace();

    match (segments.next(), segments.next(), segments.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Some(token),
        _ => None,
    }
}
