mod login;
mod payment_intent;

pub use login::LoginResponse;
pub use payment_intent::{PaymentIntentRequest, PaymentIntentResponse, ProviderErrorBody};
