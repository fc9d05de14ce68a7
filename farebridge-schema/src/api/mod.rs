mod error;
mod intent;

pub use error::ApiErrorBody;
pub use intent::{CreateIntentRequest, CreateIntentResponse, FunctionPayload, FunctionResponse};
