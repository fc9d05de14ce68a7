//! Provider payment-intent wire schemas.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of `POST /api/v1/pa/payment_intents/create`.
///
/// `amount` is in decimal major units; `request_id` is the per-request
/// idempotency token, so a retried creation with the same id is not charged
/// twice provider-side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentIntentRequest {
    pub request_id: String,
    pub amount: f64,
    pub currency: String,
    pub merchant_order_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Body of a successful intent creation.
///
/// Only `id` and `client_secret` are load-bearing for the bridge; everything
/// else is tolerated and passed over so provider schema growth does not break
/// deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentIntentResponse {
    pub id: String,
    pub client_secret: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Best-effort parse of a provider error body.
///
/// Provider errors are flat `{code, message}` objects, but malformed or
/// HTML bodies occur on gateway-level failures; callers should fall back to
/// the raw text when this does not parse.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intent_request_serializes_major_unit_amount() {
        let req = PaymentIntentRequest {
            request_id: "req_1".to_string(),
            amount: 50.0,
            currency: "INR".to_string(),
            merchant_order_id: "ORD1".to_string(),
            customer_id: None,
        };

        let out = serde_json::to_value(&req).expect("serialize request");
        assert_eq!(
            out,
            json!({
                "request_id": "req_1",
                "amount": 50.0,
                "currency": "INR",
                "merchant_order_id": "ORD1",
            })
        );
    }

    #[test]
    fn intent_response_tolerates_provider_extras() {
        let resp: PaymentIntentResponse = serde_json::from_value(json!({
            "id": "int_hkdm",
            "client_secret": "cs_live",
            "amount": 50.0,
            "currency": "INR",
            "status": "REQUIRES_PAYMENT_METHOD",
            "captured_amount": 0,
            "created_at": "2026-08-04T08:00:00+0000",
        }))
        .expect("failed to deserialize");

        assert_eq!(resp.id, "int_hkdm");
        assert_eq!(resp.client_secret, "cs_live");
        assert_eq!(resp.status.as_deref(), Some("REQUIRES_PAYMENT_METHOD"));
        assert_eq!(resp.extra.get("captured_amount"), Some(&json!(0)));
    }

    #[test]
    fn provider_error_body_parses_flat_code_message() {
        let err: ProviderErrorBody = serde_json::from_value(json!({
            "code": "validation_error",
            "message": "currency is invalid",
            "source": "currency",
        }))
        .expect("failed to deserialize");

        assert_eq!(err.code.as_deref(), Some("validation_error"));
        assert_eq!(err.message.as_deref(), Some("currency is invalid"));
        assert_eq!(err.extra.get("source"), Some(&json!("currency")));
    }
}
