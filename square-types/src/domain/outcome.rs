//! Payment and refund outcomes in the host's payment-status vocabulary.

use serde::{Deserialize, Serialize};

/// Identifier of a captured payment at the processor. Held by the host
/// order record so refunds can reference the original transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Creates a PaymentId from the processor's identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a payment-processing operation, surfaced to the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOutcome {
    /// The card was charged; the order moves to Paid.
    Paid { transaction_id: PaymentId },
    /// The charge did not happen; one human-readable message per error.
    Failed { errors: Vec<String> },
}

impl PaymentOutcome {
    /// A failed outcome carrying a single message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            errors: vec![message.into()],
        }
    }

    /// Returns true if the payment was captured.
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid { .. })
    }
}

/// Result of a refund operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundOutcome {
    /// The full order total was refunded.
    Refunded,
    /// Less than the order total was refunded.
    PartiallyRefunded,
    /// The refund did not happen; one human-readable message per error.
    Failed { errors: Vec<String> },
}

impl RefundOutcome {
    /// A failed outcome carrying a single message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            errors: vec![message.into()],
        }
    }
}

/// Payment statuses the host order pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Authorized,
    Paid,
    Voided,
    Refunded,
    PartiallyRefunded,
}

impl PaymentStatus {
    /// Maps a payment state reported by the processor onto the host
    /// vocabulary. Unknown or empty states stay `Pending`.
    pub fn from_remote_state(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "authorized" => Self::Authorized,
            "captured" | "completed" => Self::Paid,
            "expired" | "voided" => Self::Voided,
            "refunded" => Self::Refunded,
            "partially_refunded" => Self::PartiallyRefunded,
            _ => Self::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_state_mapping() {
        assert_eq!(PaymentStatus::from_remote_state("COMPLETED"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_remote_state("captured"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_remote_state("Authorized"), PaymentStatus::Authorized);
        assert_eq!(PaymentStatus::from_remote_state("voided"), PaymentStatus::Voided);
        assert_eq!(PaymentStatus::from_remote_state("expired"), PaymentStatus::Voided);
        assert_eq!(PaymentStatus::from_remote_state("refunded"), PaymentStatus::Refunded);
        assert_eq!(
            PaymentStatus::from_remote_state("PARTIALLY_REFUNDED"),
            PaymentStatus::PartiallyRefunded
        );
    }

    #[test]
    fn test_unknown_state_stays_pending() {
        assert_eq!(PaymentStatus::from_remote_state(""), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_remote_state("APPROVED"), PaymentStatus::Pending);
    }

    #[test]
    fn test_failed_outcome_single_message() {
        let outcome = PaymentOutcome::failed("declined");
        assert!(!outcome.is_paid());
        assert_eq!(
            outcome,
            PaymentOutcome::Failed {
                errors: vec!["declined".to_string()]
            }
        );
    }
}
