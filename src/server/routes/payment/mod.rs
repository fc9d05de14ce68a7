use crate::server::router::AppState;
use axum::{Router, routing::post};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/payment/intent", post(handlers::create_intent_handler))
        .route(
            "/v1/functions/payment-intent",
            post(handlers::function_intent_handler),
        )
}
