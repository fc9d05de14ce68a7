use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of a successful `POST /api/v1/authentication/login`.
///
/// The token is a short-lived bearer credential. `expires_at` is kept as the
/// provider's raw timestamp string; the bridge never reuses a token across
/// invocations, so it is carried for logging only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_tolerates_unknown_fields() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "token": "tok_abc",
            "expires_at": "2026-08-04T07:59:41+0000",
            "account_id": "acct_1",
        }))
        .expect("failed to deserialize");

        assert_eq!(resp.token, "tok_abc");
        assert_eq!(resp.expires_at.as_deref(), Some("2026-08-04T07:59:41+0000"));
        assert_eq!(resp.extra.get("account_id"), Some(&json!("acct_1")));
    }

    #[test]
    fn deserialize_requires_token() {
        let err = serde_json::from_value::<LoginResponse>(json!({
            "expires_at": "2026-08-04T07:59:41+0000",
        }))
        .expect_err("expected deserialization to fail");

        assert!(err.to_string().contains("token"));
    }
}
