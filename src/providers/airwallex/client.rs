use crate::config::AirwallexConfig;
use crate::error::GatewayError;
use farebridge_schema::{LoginResponse, PaymentIntentRequest, PaymentIntentResponse};
use serde_json::json;
use tracing::debug;
use url::Url;

use super::{LOGIN_PATH, PAYMENT_INTENTS_CREATE_PATH};

/// Stateless provider gateway: one login call, one intent-creation call.
///
/// Holds credentials and the shared HTTP client, never a token; every bridge
/// invocation re-authenticates. Both calls are single-shot with no retry
/// policy, and a non-success status always carries the provider's raw body
/// back to the caller.
#[derive(Clone)]
pub struct AirwallexGateway {
    client: reqwest::Client,
    cfg: AirwallexConfig,
}

impl AirwallexGateway {
    pub fn new(cfg: AirwallexConfig, client: reqwest::Client) -> Self {
        Self { client, cfg }
    }

    /// True when both provider credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.cfg.has_credentials()
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.cfg.api_base.join(path)?)
    }

    /// Exchange the client id + API key for a fresh bearer token.
    ///
    /// On non-2xx the operation fails as an authentication error and the
    /// caller must not proceed to intent creation.
    pub async fn login(&self) -> Result<LoginResponse, GatewayError> {
        let url = self.endpoint(LOGIN_PATH)?;
        let resp = self
            .client
            .post(url)
            .header("x-client-id", &self.cfg.client_id)
            .header("x-api-key", &self.cfg.api_key)
            .json(&json!({}))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Auth { status, body });
        }

        debug!(status = %status, "provider login succeeded");
        serde_json::from_str(&body).map_err(|err| GatewayError::Parse {
            message: err.to_string(),
            body: GatewayError::truncate_body(&body),
        })
    }

    /// Create a payment intent with the given bearer token.
    pub async fn create_intent(
        &self,
        token: &str,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, GatewayError> {
        let url = self.endpoint(PAYMENT_INTENTS_CREATE_PATH)?;
        let resp = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Intent { status, body });
        }

        debug!(status = %status, request_id = %request.request_id, "provider intent creation succeeded");
        serde_json::from_str(&body).map_err(|err| GatewayError::Parse {
            message: err.to_string(),
            body: GatewayError::truncate_body(&body),
        })
    }
}
