//! Payment-intent orchestration.
//!
//! One invocation performs exactly two sequential outbound calls: provider
//! login, then intent creation. Nothing is persisted and nothing is retried;
//! a failed invocation surfaces the provider's response and the caller (a
//! checkout screen) decides whether to try again.

use crate::error::PaymentError;
use crate::providers::airwallex::AirwallexGateway;
use chrono::Utc;
use farebridge_schema::{
    CreateIntentRequest, CreateIntentResponse, PaymentIntentRequest, minor_to_major,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Generates the per-request idempotency token sent as the provider's
/// `request_id`. Millisecond timestamp plus a v4 UUID; two invocations with
/// identical payloads must never collide, otherwise the second charge would
/// be silently dropped provider-side.
fn idempotency_token() -> String {
    format!(
        "req_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Creates one payment intent for an already-validated request.
///
/// `request.amount` is in integer minor units; the division by 100 happens
/// here, exactly once. Handlers must never pre-convert.
pub async fn create_payment_intent(
    gateway: &AirwallexGateway,
    request: &CreateIntentRequest,
) -> Result<CreateIntentResponse, PaymentError> {
    if !gateway.has_credentials() {
        warn!(
            order_id = %request.order_id,
            "payment intent rejected: provider credentials not configured"
        );
        return Err(PaymentError::MissingCredentials);
    }

    let start = Instant::now();

    let login = match gateway.login().await {
        Ok(login) => login,
        Err(err) => {
            warn!(order_id = %request.order_id, error = %err, "provider authentication failed");
            return Err(err.into());
        }
    };

    let amount = minor_to_major(request.amount);
    let provider_request = PaymentIntentRequest {
        request_id: idempotency_token(),
        amount,
        currency: request.currency.clone(),
        merchant_order_id: request.order_id.clone(),
        customer_id: request.customer_id.clone(),
    };

    let intent = match gateway.create_intent(&login.token, &provider_request).await {
        Ok(intent) => intent,
        Err(err) => {
            warn!(
                order_id = %request.order_id,
                request_id = %provider_request.request_id,
                error = %err,
                "provider intent creation failed"
            );
            return Err(err.into());
        }
    };

    info!(
        intent_id = %intent.id,
        order_id = %request.order_id,
        currency = %request.currency,
        amount,
        latency_ms = start.elapsed().as_millis() as u64,
        "created payment intent"
    );

    Ok(CreateIntentResponse {
        intent_id: intent.id,
        client_secret: intent.client_secret,
        currency: request.currency.clone(),
        amount,
    })
}
