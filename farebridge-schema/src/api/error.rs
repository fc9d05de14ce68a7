use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope returned on every non-2xx response.
///
/// `details` carries the provider's raw error body on upstream failures so
/// operators can diagnose declines without provider-side log access.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Value) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}
