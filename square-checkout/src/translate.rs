//! Maps remote API outcomes into the host's payment-result vocabulary.

use rust_decimal::Decimal;

use square_types::{
    CaptureResponse, GatewayError, PaymentOutcome, RefundOutcome, RefundResponse, RemoteError,
};

use crate::defaults::{REMOTE_API_ERROR_PREFIX, REMOTE_ERROR_PREFIX};

/// One message per structured error carried in a success envelope.
fn response_error_messages(errors: &[RemoteError]) -> Vec<String> {
    errors
        .iter()
        .map(|error| format!("{} {}", REMOTE_ERROR_PREFIX, error))
        .collect()
}

/// One message per error entry carried by a gateway failure. Transport and
/// decode faults collapse to a single message instead of propagating.
fn gateway_error_messages(error: &GatewayError) -> Vec<String> {
    match error {
        GatewayError::Api { errors, .. } if !errors.is_empty() => errors
            .iter()
            .map(|entry| format!("{} {}", REMOTE_API_ERROR_PREFIX, entry))
            .collect(),
        other => vec![format!("{} {}", REMOTE_API_ERROR_PREFIX, other)],
    }
}

/// Translates the create-payment result.
///
/// No structured errors means the card was charged; the transaction id is
/// copied verbatim from the response for later refunds.
pub fn capture_outcome(result: Result<CaptureResponse, GatewayError>) -> PaymentOutcome {
    match result {
        Ok(response) => {
            if !response.errors.is_empty() {
                PaymentOutcome::Failed {
                    errors: response_error_messages(&response.errors),
                }
            } else if let Some(payment_id) = response.payment_id {
                PaymentOutcome::Paid {
                    transaction_id: payment_id,
                }
            } else {
                // Success status but neither a payment nor errors.
                PaymentOutcome::failed(format!(
                    "{} malformed response, no payment id returned",
                    REMOTE_API_ERROR_PREFIX
                ))
            }
        }
        Err(error) => PaymentOutcome::Failed {
            errors: gateway_error_messages(&error),
        },
    }
}

/// Translates the refund result.
///
/// A refund of exactly the order total is a full refund; anything less is
/// partial. The comparison is exact decimal equality on the major-unit
/// amounts - no tolerance is applied.
pub fn refund_outcome(
    result: Result<RefundResponse, GatewayError>,
    amount_to_refund: Decimal,
    order_total: Decimal,
) -> RefundOutcome {
    match result {
        Ok(response) => {
            if !response.errors.is_empty() {
                RefundOutcome::Failed {
                    errors: response_error_messages(&response.errors),
                }
            } else if amount_to_refund == order_total {
                RefundOutcome::Refunded
            } else {
                RefundOutcome::PartiallyRefunded
            }
        }
        Err(error) => RefundOutcome::Failed {
            errors: gateway_error_messages(&error),
        },
    }
}
