pub mod airwallex;
pub mod amount;
pub mod api;

pub use airwallex::{LoginResponse, PaymentIntentRequest, PaymentIntentResponse, ProviderErrorBody};
pub use amount::minor_to_major;
pub use api::{
    ApiErrorBody, CreateIntentRequest, CreateIntentResponse, FunctionPayload, FunctionResponse,
};
