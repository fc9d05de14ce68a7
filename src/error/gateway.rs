use axum::http::StatusCode;
use thiserror::Error as ThisError;

/// Errors from the two outbound provider calls.
///
/// `Auth` and `Intent` keep the provider's raw response body so operators can
/// diagnose declines without provider-side log access; the body surfaces in
/// the HTTP error envelope's `details` field.
#[derive(Debug, ThisError)]
pub enum GatewayError {
    #[error("provider authentication failed with status {status}")]
    Auth { status: StatusCode, body: String },

    #[error("provider intent creation failed with status {status}")]
    Intent { status: StatusCode, body: String },

    #[error("provider request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider response parse error: {message}. Body: {body}")]
    Parse { message: String, body: String },

    #[error("provider URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl GatewayError {
    /// Truncate an upstream body for log/parse diagnostics.
    pub(crate) fn truncate_body(body: &str) -> String {
        body.char_indices()
            .nth(500)
            .map(|(idx, _)| format!("{}...<truncated>", &body[..idx]))
            .unwrap_or_else(|| body.to_string())
    }
}
