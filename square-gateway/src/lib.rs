//! # Square Gateway
//!
//! Outbound adapter for the Square Payments API: a stateless `reqwest`
//! client implementing the [`square_types::PaymentGateway`] port.
//!
//! All protocol-level concerns live here - endpoint selection, bearer
//! authentication, API versioning, wire DTOs, and the mapping of HTTP
//! status/body combinations onto the typed gateway errors. Retry and
//! timeout policy is deliberately absent; the idempotency key carried by
//! every request is the double-charge safety net.

mod client;
mod wire;

pub use client::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL, SquareClient, api_base_url};
