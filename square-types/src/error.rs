//! Error types for the payment integration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{AddressId, CountryId, CustomerId, StateId};

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(Decimal),
}

/// A referenced store record could not be resolved.
///
/// Fatal at the point of detection: request assembly aborts and nothing is
/// sent to the processor.
#[derive(Debug, thiserror::Error)]
pub enum DependencyError {
    #[error("Customer cannot be loaded: {0}")]
    Customer(CustomerId),

    #[error("Primary store currency cannot be loaded")]
    Currency,

    #[error("Address cannot be loaded: {0}")]
    Address(AddressId),

    #[error("State or province cannot be loaded: {0}")]
    State(StateId),

    #[error("Country cannot be loaded: {0}")]
    Country(CountryId),
}

/// Settings store failures.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load payment settings: {0}")]
    Load(String),

    #[error("Failed to save payment settings: {0}")]
    Save(String),
}

/// One structured error entry returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub category: Option<String>,
    pub code: String,
    pub detail: Option<String>,
    pub field: Option<String>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} : {}", self.code, detail),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Remote gateway failures. Never rethrown past the orchestrator boundary;
/// the response translator recovers each variant into a typed outcome.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The API answered with an error status and a structured error list.
    #[error("Remote API returned HTTP {status}")]
    Api { status: u16, errors: Vec<RemoteError> },

    /// Network-level failure (connect, timeout, TLS).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Could not decode remote response: {0}")]
    Decode(String),
}

/// Fatal checkout-operation errors. These stop the host pipeline, unlike
/// remote failures, which become `Failed` outcomes.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_with_detail() {
        let error = RemoteError {
            category: Some("INVALID_REQUEST_ERROR".to_string()),
            code: "INVALID_CARD".to_string(),
            detail: Some("Card number is invalid".to_string()),
            field: None,
        };
        assert_eq!(error.to_string(), "INVALID_CARD : Card number is invalid");
    }

    #[test]
    fn test_remote_error_display_without_detail() {
        let error = RemoteError {
            category: None,
            code: "UNAUTHORIZED".to_string(),
            detail: None,
            field: None,
        };
        assert_eq!(error.to_string(), "UNAUTHORIZED");
    }
}
