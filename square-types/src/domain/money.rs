//! Monetary values in integer minor units.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// ISO 4217 currency code, carried verbatim from the store configuration.
///
/// No local check is made that the processor supports the currency; an
/// unsupported code surfaces as a remote validation error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code. The value is not normalized or validated.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary value in the smallest unit of its currency (cents, pence, etc.)
/// for integer-safe transmission to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a Money value from an amount already in minor units.
    pub fn from_minor(amount: i64, currency: CurrencyCode) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { amount, currency })
    }

    /// Converts a major-unit decimal amount (e.g. an order total of 19.99)
    /// into minor units: round to two fractional digits, then scale by 100.
    ///
    /// Assumes a currency with two minor-unit digits; no exponent lookup
    /// table is consulted.
    pub fn from_major(total: Decimal, currency: CurrencyCode) -> Result<Self, DomainError> {
        let minor = (total.round_dp(2) * Decimal::ONE_HUNDRED)
            .to_i64()
            .ok_or(DomainError::AmountOutOfRange(total))?;
        Self::from_minor(minor, currency)
    }

    /// Returns the amount in smallest currency units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.amount / 100;
        let minor = (self.amount % 100).abs();
        write!(f, "{}.{:02} {}", major, minor, self.currency)
    }
}
