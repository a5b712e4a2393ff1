//! Stateless HTTP client for the Square Payments API.

use serde::Serialize;
use serde::de::DeserializeOwned;

use square_types::{
    CapturePaymentRequest, CaptureResponse, Environment, GatewayError, PaymentGateway,
    ProcessorCredentials, RefundPaymentRequest, RefundResponse,
};

use crate::wire;

/// Production API endpoint.
pub const PRODUCTION_BASE_URL: &str = "https://connect.squareup.com";

/// Sandbox API endpoint, for development and testing only.
pub const SANDBOX_BASE_URL: &str = "https://connect.squareupsandbox.com";

/// API version pinned for every request.
const SQUARE_VERSION: &str = "2024-01-18";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("square-checkout/", env!("CARGO_PKG_VERSION"));

/// Returns the API endpoint for an environment.
pub fn api_base_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Sandbox => SANDBOX_BASE_URL,
        Environment::Production => PRODUCTION_BASE_URL,
    }
}

/// Square Payments API client.
///
/// Holds only the connection pool. Credentials arrive with each call, so a
/// single client instance serves concurrent checkouts for different orders
/// and both environments without shared mutable state.
pub struct SquareClient {
    http: reqwest::Client,
}

impl SquareClient {
    /// Creates a new client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        credentials: &ProcessorCredentials,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", api_base_url(credentials.environment), path);

        let response = self
            .http
            .post(url)
            .bearer_auth(&credentials.access_token)
            .header("Square-Version", SQUARE_VERSION)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
        } else {
            // Error-status bodies carry the same structured error list.
            let errors = serde_json::from_str::<wire::ErrorEnvelope>(&text)
                .map(|envelope| envelope.errors.into_iter().map(Into::into).collect())
                .unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                errors,
            })
        }
    }
}

impl Default for SquareClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PaymentGateway for SquareClient {
    async fn create_payment(
        &self,
        credentials: &ProcessorCredentials,
        request: &CapturePaymentRequest,
    ) -> Result<CaptureResponse, GatewayError> {
        tracing::debug!(
            environment = %credentials.environment,
            amount = request.amount.amount(),
            "sending create-payment request"
        );

        let body = wire::CreatePaymentBody::from(request);
        let envelope: wire::PaymentEnvelope =
            self.post(credentials, "/v2/payments", &body).await?;
        Ok(envelope.into())
    }

    async fn refund_payment(
        &self,
        credentials: &ProcessorCredentials,
        request: &RefundPaymentRequest,
    ) -> Result<RefundResponse, GatewayError> {
        tracing::debug!(
            environment = %credentials.environment,
            payment_id = %request.payment_id,
            amount = request.amount.amount(),
            "sending refund request"
        );

        let body = wire::RefundPaymentBody::from(request);
        let envelope: wire::RefundEnvelope = self.post(credentials, "/v2/refunds", &body).await?;
        Ok(envelope.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square_types::SquareSettings;

    #[test]
    fn test_base_url_per_environment() {
        assert_eq!(api_base_url(Environment::Sandbox), SANDBOX_BASE_URL);
        assert_eq!(api_base_url(Environment::Production), PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_environment_and_token_switch_together() {
        let mut settings = SquareSettings {
            use_sandbox: true,
            sandbox_access_token: "sandbox-token".to_string(),
            sandbox_location_id: "sandbox-loc".to_string(),
            access_token: "live-token".to_string(),
            location_id: "live-loc".to_string(),
            ..SquareSettings::default()
        };

        let credentials = settings.credentials();
        assert_eq!(api_base_url(credentials.environment), SANDBOX_BASE_URL);
        assert_eq!(credentials.access_token, "sandbox-token");
        assert_eq!(credentials.location_id, "sandbox-loc");

        settings.use_sandbox = false;
        let credentials = settings.credentials();
        assert_eq!(api_base_url(credentials.environment), PRODUCTION_BASE_URL);
        assert_eq!(credentials.access_token, "live-token");
        assert_eq!(credentials.location_id, "live-loc");
    }
}
