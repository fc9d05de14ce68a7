mod gateway;
mod payment;

pub use gateway::GatewayError;
pub use payment::PaymentError;
