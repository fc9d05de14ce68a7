use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use farebridge_schema::ApiErrorBody;
use serde_json::Value;
use thiserror::Error as ThisError;

use super::GatewayError;

/// Request-level error taxonomy for the payment routes.
///
/// Mapping: configuration error => 500, malformed/invalid payload => 400,
/// anything upstream => 502. No retries, no recovery; every failure surfaces
/// directly to the caller.
#[derive(Debug, ThisError)]
pub enum PaymentError {
    #[error("payment provider credentials are not configured")]
    MissingCredentials,

    #[error("invalid request: {reason}")]
    BadPayload { reason: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<JsonRejection> for PaymentError {
    fn from(rejection: JsonRejection) -> Self {
        PaymentError::BadPayload {
            reason: rejection.body_text(),
        }
    }
}

/// Best-effort parse of a provider body for the `details` field; falls back
/// to the raw text when the provider returned something other than JSON.
fn provider_details(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PaymentError::MissingCredentials => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody::new(
                    "Server misconfiguration: payment provider credentials are not set",
                ),
            ),

            PaymentError::BadPayload { reason } => {
                (StatusCode::BAD_REQUEST, ApiErrorBody::new(reason))
            }

            PaymentError::Gateway(GatewayError::Auth { body, .. }) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody::with_details(
                    "Payment provider authentication failed",
                    provider_details(body),
                ),
            ),

            PaymentError::Gateway(GatewayError::Intent { body, .. }) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody::with_details(
                    "Payment intent creation failed",
                    provider_details(body),
                ),
            ),

            PaymentError::Gateway(GatewayError::Transport(_))
            | PaymentError::Gateway(GatewayError::Url(_)) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody::new("Payment provider unreachable"),
            ),

            PaymentError::Gateway(GatewayError::Parse { body, .. }) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody::with_details(
                    "Failed to parse payment provider response",
                    Value::String(body),
                ),
            ),
        };
        (status, Json(error_body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_maps_to_500_misconfiguration() {
        let resp = PaymentError::MissingCredentials.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_auth_failure_maps_to_502() {
        let err = PaymentError::Gateway(GatewayError::Auth {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"code":"unauthorized"}"#.to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn bad_payload_maps_to_400() {
        let err = PaymentError::BadPayload {
            reason: "amount must be a positive integer".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_details_falls_back_to_raw_text() {
        assert_eq!(
            provider_details("<html>bad gateway</html>".to_string()),
            Value::String("<html>bad gateway</html>".to_string())
        );
        assert_eq!(
            provider_details(r#"{"code":"declined"}"#.to_string()),
            serde_json::json!({"code":"declined"})
        );
    }
}
