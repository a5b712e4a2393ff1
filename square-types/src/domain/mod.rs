//! Pure domain types.

mod address;
mod money;
mod outcome;
mod settings;

pub use address::{AddressId, AddressRecord, CountryId, Customer, CustomerId, PostalAddress, StateId};
pub use money::{CurrencyCode, Money};
pub use outcome::{PaymentId, PaymentOutcome, PaymentStatus, RefundOutcome};
pub use settings::{Environment, ProcessorCredentials, SquareSettings};
