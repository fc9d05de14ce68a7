use super::extract::{FunctionPreprocess, IntentPreprocess};
use crate::bridge;
use crate::error::PaymentError;
use crate::server::router::AppState;
use axum::{Json, extract::State};
use farebridge_schema::{CreateIntentResponse, FunctionResponse};

pub(super) async fn create_intent_handler(
    State(state): State<AppState>,
    IntentPreprocess(request): IntentPreprocess,
) -> Result<Json<CreateIntentResponse>, PaymentError> {
    let response = bridge::create_payment_intent(&state.gateway, &request).await?;
    Ok(Json(response))
}

/// Same bridge as [`create_intent_handler`], surfaced under the
/// function-execution contract's response shape.
pub(super) async fn function_intent_handler(
    State(state): State<AppState>,
    FunctionPreprocess(request): FunctionPreprocess,
) -> Result<Json<FunctionResponse>, PaymentError> {
    let response = bridge::create_payment_intent(&state.gateway, &request).await?;
    Ok(Json(FunctionResponse {
        payment_intent_id: response.intent_id,
        client_secret: response.client_secret,
    }))
}
