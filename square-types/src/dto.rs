//! Data Transfer Objects crossing the checkout-pipeline and gateway boundaries.
//!
//! Every type here is transient: constructed per call, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{CustomerId, Money, PaymentId, PostalAddress};
use crate::error::RemoteError;

// ─────────────────────────────────────────────────────────────────────────────
// Host pipeline DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Payment info handed down by the host checkout pipeline for one order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAttempt {
    pub customer_id: CustomerId,
    /// Order total in major currency units.
    pub order_total: Decimal,
    /// Transient per-attempt values; the opaque card token travels here
    /// under [`crate::dto::PAYMENT_TOKEN_KEY`] and is removed once consumed.
    #[serde(default)]
    pub custom_values: HashMap<String, String>,
}

/// Custom-values key under which the opaque card token is stored.
pub const PAYMENT_TOKEN_KEY: &str = "PaymentToken";

impl PaymentAttempt {
    /// Creates an attempt with no custom values.
    pub fn new(customer_id: CustomerId, order_total: Decimal) -> Self {
        Self {
            customer_id,
            order_total,
            custom_values: HashMap::new(),
        }
    }

    /// The opaque card token submitted with this attempt, if any.
    pub fn payment_token(&self) -> Option<&str> {
        self.custom_values.get(PAYMENT_TOKEN_KEY).map(String::as_str)
    }
}

/// Refund request from the host order pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundAttempt {
    /// Identifier of the captured payment being refunded.
    pub transaction_id: PaymentId,
    /// Amount to refund, in major currency units.
    pub amount_to_refund: Decimal,
    /// Total of the original order, in major currency units.
    pub order_total: Decimal,
}

// ─────────────────────────────────────────────────────────────────────────────
// Assembled gateway requests
// ─────────────────────────────────────────────────────────────────────────────

/// A fully assembled create-payment call, ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePaymentRequest {
    /// Fresh UUID per attempt. Reusing the key for a true retry of the same
    /// attempt is the remote API's double-charge protection.
    pub idempotency_key: String,
    pub amount: Money,
    pub buyer_email: String,
    pub billing_address: Option<PostalAddress>,
    pub shipping_address: Option<PostalAddress>,
    /// Single-use token produced by the processor's card form.
    pub source_token: String,
    pub location_id: String,
}

/// A fully assembled refund call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundPaymentRequest {
    pub idempotency_key: String,
    pub amount: Money,
    pub payment_id: PaymentId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Gateway responses
// ─────────────────────────────────────────────────────────────────────────────

/// What the remote create-payment call came back with.
#[derive(Debug, Clone, Default)]
pub struct CaptureResponse {
    pub payment_id: Option<PaymentId>,
    /// Payment state as reported by the processor, e.g. "COMPLETED".
    pub status: Option<String>,
    pub errors: Vec<RemoteError>,
}

/// What the remote refund call came back with.
#[derive(Debug, Clone, Default)]
pub struct RefundResponse {
    pub refund_id: Option<String>,
    pub status: Option<String>,
    pub errors: Vec<RemoteError>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Capabilities & widget
// ─────────────────────────────────────────────────────────────────────────────

/// Recurring-payment support levels the host understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringSupport {
    NotSupported,
    Manual,
    Automatic,
}

/// How the payment method participates in checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFlow {
    /// Card data is collected on the checkout page itself.
    Standard,
    /// The buyer is redirected to a third-party page.
    Redirect,
}

/// Static capability flags advertised to the host checkout pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodCapabilities {
    pub supports_capture: bool,
    pub supports_refund: bool,
    pub supports_partial_refund: bool,
    pub supports_void: bool,
    pub recurring: RecurringSupport,
    pub flow: PaymentFlow,
    /// Whether the payment-info checkout step can be skipped.
    pub skip_payment_info: bool,
}

/// Values the client-side card form needs to initialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutWidgetConfig {
    pub application_key: String,
    pub location_id: String,
}
