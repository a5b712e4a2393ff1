//! Outbound port to the remote payment processor.

use crate::domain::ProcessorCredentials;
use crate::dto::{CapturePaymentRequest, CaptureResponse, RefundPaymentRequest, RefundResponse};
use crate::error::GatewayError;

/// The two remote operations the checkout flow needs.
///
/// Credentials are resolved per call and passed in, so implementations can
/// stay stateless and concurrent checkouts for different orders never share
/// scratch state. No retry is performed here; the idempotency key on each
/// request is the sole safety net against duplicate charges.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Charges the tokenized card (create-payment, autocomplete).
    async fn create_payment(
        &self,
        credentials: &ProcessorCredentials,
        request: &CapturePaymentRequest,
    ) -> Result<CaptureResponse, GatewayError>;

    /// Refunds a previously captured payment.
    async fn refund_payment(
        &self,
        credentials: &ProcessorCredentials,
        request: &RefundPaymentRequest,
    ) -> Result<RefundResponse, GatewayError>;
}
