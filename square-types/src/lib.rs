//! # Square Types
//!
//! Domain types and port traits for the Square checkout integration.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, addresses, outcomes, settings)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the checkout-pipeline and gateway boundaries
//! - `error/` - Domain, dependency, and gateway error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AddressId, AddressRecord, CountryId, CurrencyCode, Customer, CustomerId, Environment, Money,
    PaymentId, PaymentOutcome, PaymentStatus, PostalAddress, ProcessorCredentials, RefundOutcome,
    SquareSettings, StateId,
};
pub use dto::*;
pub use error::{
    CheckoutError, DependencyError, DomainError, GatewayError, RemoteError, SettingsError,
};
pub use ports::{PaymentGateway, PaymentMethod, SettingsStore, StoreDirectory};
