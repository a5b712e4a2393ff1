//! Host-facing payment method port.
//!
//! This is the seam the commerce framework drives. Every operation is an
//! independent request/response cycle; implementations must keep no
//! per-call state on themselves so concurrent orders stay isolated.

use std::collections::HashMap;

use crate::domain::{PaymentId, PaymentOutcome, RefundOutcome};
use crate::dto::{CheckoutWidgetConfig, PaymentAttempt, PaymentMethodCapabilities, RefundAttempt};
use crate::error::CheckoutError;

#[async_trait::async_trait]
pub trait PaymentMethod: Send + Sync + 'static {
    /// Charges the card tokenized during checkout and marks the order paid.
    ///
    /// Remote failures come back as a `Failed` outcome; only configuration
    /// and dependency problems are fatal.
    async fn process_payment(
        &self,
        attempt: &mut PaymentAttempt,
    ) -> Result<PaymentOutcome, CheckoutError>;

    /// Refunds a previously captured payment, fully or partially.
    async fn refund(&self, attempt: &RefundAttempt) -> Result<RefundOutcome, CheckoutError>;

    /// Capture after authorization. Not offered by this integration.
    async fn capture(&self, attempt: &PaymentAttempt) -> PaymentOutcome;

    /// Voids an authorized payment. Not offered by this integration.
    async fn void_payment(&self, transaction_id: &PaymentId) -> PaymentOutcome;

    /// Charges a recurring payment. Not offered by this integration.
    async fn process_recurring_payment(&self, attempt: &mut PaymentAttempt) -> PaymentOutcome;

    /// Cancels a recurring agreement. Not offered by this integration.
    async fn cancel_recurring_payment(&self, transaction_id: &PaymentId) -> PaymentOutcome;

    /// Client-side validation errors carried in the submitted form.
    fn validate_payment_form(&self, form: &HashMap<String, String>) -> Vec<String>;

    /// Extracts per-attempt custom values (the opaque card token) from the
    /// submitted form.
    fn payment_info(&self, form: &HashMap<String, String>) -> HashMap<String, String>;

    /// Static capability flags.
    fn capabilities(&self) -> PaymentMethodCapabilities;

    /// Environment-dependent URL of the processor's card-form script, for
    /// injection into the one-page checkout head section.
    async fn payment_form_script_url(&self) -> Result<&'static str, CheckoutError>;

    /// Application key and location id for the client-side card form.
    async fn widget_config(&self) -> Result<CheckoutWidgetConfig, CheckoutError>;

    /// Human-readable description shown on the checkout page.
    fn description(&self) -> &'static str;
}
