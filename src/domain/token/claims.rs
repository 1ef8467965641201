use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TokenConfig;

/// Signed payload carried by a token: `{data, exp}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Caller-supplied value, opaque to the core
    #[serde(default)]
    pub data: Value,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
    /// Keys other than `data` and `exp` found in a verified token.
    /// Always empty for tokens minted by this crate.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Build claims for a token issued at `issued_at`
    pub fn new(data: Value, issued_at: DateTime<Utc>, config: &TokenConfig) -> Self {
        Self {
            data,
            exp: (issued_at + config.expiration()).timestamp(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use super::*;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_exp_is_issuance_plus_minutes() {
        let config = TokenConfig::new("key", 3);
        let claims = Claims::new(json!({"user": "alice"}), issued_at(), &config);

        assert_eq!(claims.exp, (issued_at() + Duration::minutes(3)).timestamp());
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_serializes_only_reserved_keys() {
        let config = TokenConfig::new("key", 1);
        let claims = Claims::new(json!([1, 2, 3]), issued_at(), &config);

        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["data"], json!([1, 2, 3]));
        assert_eq!(object["exp"], json!(issued_at().timestamp() + 60));
    }

    #[test]
    fn test_deserialize_keeps_foreign_keys() {
        let claims: Claims = serde_json::from_value(json!({
            "data": {"user": "bob"},
            "exp": 1700000000,
            "iss": "elsewhere"
        }))
        .unwrap();

        assert_eq!(claims.data, json!({"user": "bob"}));
        assert_eq!(claims.exp, 1700000000);
        assert_eq!(claims.extra.get("iss"), Some(&json!("elsewhere")));
    }

    #[test]
    fn test_missing_data_defaults_to_null() {
        let claims: Claims = serde_json::from_value(json!({"exp": 10})).unwrap();
        assert_eq!(claims.data, Value::Null);
    }
}
