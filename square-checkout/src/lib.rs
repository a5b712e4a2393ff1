//! # Square Checkout
//!
//! Application layer of the Square payment integration: the request
//! assembler, the response translator, and the payment-method orchestrator
//! implementing the host-facing [`square_types::PaymentMethod`] port.
//!
//! ## Architecture
//!
//! The orchestrator is generic over the gateway, directory, and settings
//! ports - adapters are injected at compile time, and the tests run against
//! in-memory fakes. Nothing here keeps state across calls: every checkout
//! or refund operation resolves its own credentials and builds its own
//! request, so concurrent orders never interfere.

pub mod assemble;
pub mod defaults;
pub mod forms;
pub mod locale;
pub mod service;
pub mod settings;
pub mod translate;


pub use service::SquarePaymentMethod;
pub use settings::StaticSettingsStore;
