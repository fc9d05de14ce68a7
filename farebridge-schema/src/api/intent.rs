//! Client-facing payment-intent request/response schemas.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/payment/intent`.
///
/// `amount` is an integer in minor units (cents, paise). The conversion to
/// the provider's decimal major-unit amount happens once, inside the bridge;
/// clients never send pre-divided amounts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    pub amount: i64,

    /// Three-letter ISO 4217 code. Matching is case-insensitive; the bridge
    /// normalizes to uppercase before forwarding.
    pub currency: String,

    pub order_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Body of a 200 response from `POST /api/payment/intent`.
///
/// `amount` echoes the charge in decimal major units, i.e. exactly what the
/// provider was asked to collect.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub intent_id: String,
    pub client_secret: String,
    pub currency: String,
    pub amount: f64,
}

/// Body of `POST /v1/functions/payment-intent`, the contract the consumer
/// app invokes through the platform's function-execution protocol.
///
/// Field names differ from [`CreateIntentRequest`] (`bookingId`/`userId`
/// instead of `orderId`/`customerId`) but the semantics are identical;
/// both feed the same bridge.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionPayload {
    pub amount: i64,
    pub currency: String,
    pub booking_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl From<FunctionPayload> for CreateIntentRequest {
    fn from(payload: FunctionPayload) -> Self {
        Self {
            amount: payload.amount,
            currency: payload.currency,
            order_id: payload.booking_id,
            customer_id: payload.user_id,
        }
    }
}

/// Body of a 200 response from `POST /v1/functions/payment-intent`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub payment_intent_id: String,
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_intent_request_uses_camel_case_field_names() {
        let body: CreateIntentRequest = serde_json::from_value(json!({
            "amount": 5000,
            "currency": "INR",
            "orderId": "ORD1",
            "customerId": "cus_42",
        }))
        .expect("failed to deserialize");

        assert_eq!(body.amount, 5000);
        assert_eq!(body.currency, "INR");
        assert_eq!(body.order_id, "ORD1");
        assert_eq!(body.customer_id.as_deref(), Some("cus_42"));
    }

    #[test]
    fn create_intent_request_accepts_missing_customer_id() {
        let body: CreateIntentRequest = serde_json::from_value(json!({
            "amount": 1000,
            "currency": "USD",
            "orderId": "ORD2",
        }))
        .expect("failed to deserialize");

        assert!(body.customer_id.is_none());
    }

    #[test]
    fn create_intent_request_rejects_fractional_amounts() {
        // Minor units are integral; a decimal amount here is a client that
        // already divided by 100.
        let err = serde_json::from_value::<CreateIntentRequest>(json!({
            "amount": 50.0,
            "currency": "INR",
            "orderId": "ORD1",
        }))
        .expect_err("expected deserialization to fail");

        assert_eq!(err.classify(), serde_json::error::Category::Data);
    }

    #[test]
    fn function_payload_maps_onto_intent_request() {
        let payload: FunctionPayload = serde_json::from_value(json!({
            "amount": 2500,
            "currency": "usd",
            "bookingId": "bk_9",
            "userId": "usr_3",
        }))
        .expect("failed to deserialize");

        let request = CreateIntentRequest::from(payload);
        assert_eq!(request.amount, 2500);
        assert_eq!(request.order_id, "bk_9");
        assert_eq!(request.customer_id.as_deref(), Some("usr_3"));
    }

    #[test]
    fn create_intent_response_serializes_camel_case() {
        let resp = CreateIntentResponse {
            intent_id: "int_1".to_string(),
            client_secret: "secret".to_string(),
            currency: "INR".to_string(),
            amount: 50.0,
        };

        let out = serde_json::to_value(&resp).expect("serialize response");
        assert_eq!(
            out,
            json!({
                "intentId": "int_1",
                "clientSecret": "secret",
                "currency": "INR",
                "amount": 50.0,
            })
        );
    }
}
