use crate::error::PaymentError;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use farebridge_schema::{CreateIntentRequest, FunctionPayload};
use tracing::debug;

/// Extract and validate a `POST /api/payment/intent` request.
///
/// Responsibilities:
/// - Deserialize the HTTP JSON body into `CreateIntentRequest`.
/// - Enforce the inbound invariants: positive integer minor-unit amount,
///   three-letter currency code (normalized to uppercase), non-empty order
///   identifier.
///
/// Error handling:
/// - JSON syntax/schema errors from the `axum::Json` extractor are converted
///   into `PaymentError::BadPayload` via `From<JsonRejection>`, which yields
///   the standard `{error}` envelope with HTTP 400.
pub(crate) struct IntentPreprocess(pub(crate) CreateIntentRequest);

impl<S> FromRequest<S> for IntentPreprocess
where
    S: Send + Sync,
{
    type Rejection = PaymentError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<CreateIntentRequest>::from_request(req, &()).await?;
        Ok(Self(validate(body)?))
    }
}

/// Extract and validate a `POST /v1/functions/payment-intent` payload, the
/// function-execution contract (`bookingId`/`userId` field names). Converted
/// onto the canonical request before validation so both routes share one set
/// of invariants.
pub(crate) struct FunctionPreprocess(pub(crate) CreateIntentRequest);

impl<S> FromRequest<S> for FunctionPreprocess
where
    S: Send + Sync,
{
    type Rejection = PaymentError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<FunctionPayload>::from_request(req, &()).await?;
        Ok(Self(validate(payload.into())?))
    }
}

fn validate(mut request: CreateIntentRequest) -> Result<CreateIntentRequest, PaymentError> {
    if request.amount < 1 {
        return Err(PaymentError::BadPayload {
            reason: "amount must be a positive integer in minor units".to_string(),
        });
    }

    let currency = request.currency.trim();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PaymentError::BadPayload {
            reason: "currency must be a three-letter ISO code".to_string(),
        });
    }
    request.currency = currency.to_ascii_uppercase();

    if request.order_id.trim().is_empty() {
        return Err(PaymentError::BadPayload {
            reason: "order identifier must not be empty".to_string(),
        });
    }

    // Blank customer ids are treated as absent rather than forwarded.
    if request
        .customer_id
        .as_deref()
        .is_some_and(|id| id.trim().is_empty())
    {
        request.customer_id = None;
    }

    with_pretty_json_debug(&request, |pretty_body| {
        debug!(
            order_id = %request.order_id,
            body = %pretty_body,
            "extracted validated intent request"
        );
    });

    Ok(request)
}
