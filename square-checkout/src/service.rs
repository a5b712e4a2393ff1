//! Payment-method orchestrator wiring the ports together.

use std::collections::HashMap;

use square_types::{
    CheckoutError, CheckoutWidgetConfig, DependencyError, PaymentAttempt, PaymentFlow, PaymentId,
    PaymentGateway, PaymentMethod, PaymentMethodCapabilities, PaymentOutcome, RecurringSupport,
    RefundAttempt, RefundOutcome, SettingsStore, StoreDirectory, dto::PAYMENT_TOKEN_KEY,
};

use crate::defaults::{
    self, CAPTURE_NOT_SUPPORTED, CARD_DECLINED_MESSAGE, RECURRING_NOT_SUPPORTED,
    VOID_NOT_SUPPORTED,
};
use crate::locale;
use crate::{assemble, forms, translate};

/// The Square payment method, generic over its gateway, directory, and
/// settings ports.
///
/// Holds no per-order state; every operation loads settings and assembles
/// its request from scratch.
pub struct SquarePaymentMethod<G, D, S> {
    gateway: G,
    directory: D,
    settings: S,
}

impl<G, D, S> SquarePaymentMethod<G, D, S>
where
    G: PaymentGateway,
    D: StoreDirectory,
    S: SettingsStore,
{
    pub fn new(gateway: G, directory: D, settings: S) -> Self {
        Self {
            gateway,
            directory,
            settings,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }
}

#[async_trait::async_trait]
impl<G, D, S> PaymentMethod for SquarePaymentMethod<G, D, S>
where
    G: PaymentGateway,
    D: StoreDirectory,
    S: SettingsStore,
{
    #[tracing::instrument(skip_all, fields(customer_id = %attempt.customer_id))]
    async fn process_payment(
        &self,
        attempt: &mut PaymentAttempt,
    ) -> Result<PaymentOutcome, CheckoutError> {
        let Some(token) = attempt.payment_token().map(str::to_string) else {
            return Ok(PaymentOutcome::failed(CARD_DECLINED_MESSAGE));
        };

        let credentials = self.settings.load().await?.credentials();
        let request = assemble::capture_request(
            &self.directory,
            attempt.customer_id,
            attempt.order_total,
            &token,
            &credentials.location_id,
        )
        .await?;

        let result = self.gateway.create_payment(&credentials, &request).await;
        let outcome = translate::capture_outcome(result);

        if let PaymentOutcome::Paid { transaction_id } = &outcome {
            // The token is single-use; drop it so a re-submit of the same
            // attempt cannot replay it.
            attempt.custom_values.remove(PAYMENT_TOKEN_KEY);
            tracing::info!(transaction_id = %transaction_id, "payment captured");
        }

        Ok(outcome)
    }

    #[tracing::instrument(skip_all, fields(transaction_id = %attempt.transaction_id))]
    async fn refund(&self, attempt: &RefundAttempt) -> Result<RefundOutcome, CheckoutError> {
        let credentials = self.settings.load().await?.credentials();
        let currency = self
            .directory
            .primary_currency()
            .await
            .ok_or(DependencyError::Currency)?;

        let request = assemble::refund_request(
            attempt.amount_to_refund,
            currency,
            attempt.transaction_id.clone(),
        )?;

        let result = self.gateway.refund_payment(&credentials, &request).await;
        let outcome =
            translate::refund_outcome(result, attempt.amount_to_refund, attempt.order_total);

        if !matches!(outcome, RefundOutcome::Failed { .. }) {
            tracing::info!(amount = %attempt.amount_to_refund, "payment refunded");
        }

        Ok(outcome)
    }

    async fn capture(&self, _attempt: &PaymentAttempt) -> PaymentOutcome {
        PaymentOutcome::failed(CAPTURE_NOT_SUPPORTED)
    }

    async fn void_payment(&self, _transaction_id: &PaymentId) -> PaymentOutcome {
        PaymentOutcome::failed(VOID_NOT_SUPPORTED)
    }

    async fn process_recurring_payment(&self, _attempt: &mut PaymentAttempt) -> PaymentOutcome {
        PaymentOutcome::failed(RECURRING_NOT_SUPPORTED)
    }

    async fn cancel_recurring_payment(&self, _transaction_id: &PaymentId) -> PaymentOutcome {
        PaymentOutcome::failed(RECURRING_NOT_SUPPORTED)
    }

    fn validate_payment_form(&self, form: &HashMap<String, String>) -> Vec<String> {
        forms::validation_errors(form)
    }

    fn payment_info(&self, form: &HashMap<String, String>) -> HashMap<String, String> {
        forms::payment_info(form)
    }

    fn capabilities(&self) -> PaymentMethodCapabilities {
        PaymentMethodCapabilities {
            supports_capture: false,
            supports_refund: true,
            supports_partial_refund: true,
            supports_void: false,
            recurring: RecurringSupport::NotSupported,
            flow: PaymentFlow::Standard,
            skip_payment_info: false,
        }
    }

    async fn payment_form_script_url(&self) -> Result<&'static str, CheckoutError> {
        let settings = self.settings.load().await?;
        Ok(defaults::payment_form_script(
            settings.credentials().environment,
        ))
    }

    async fn widget_config(&self) -> Result<CheckoutWidgetConfig, CheckoutError> {
        let credentials = self.settings.load().await?.credentials();
        Ok(CheckoutWidgetConfig {
            application_key: credentials.application_key,
            location_id: credentials.location_id,
        })
    }

    fn description(&self) -> &'static str {
        locale::resource(locale::PAYMENT_METHOD_DESCRIPTION_KEY).unwrap_or_default()
    }
}
