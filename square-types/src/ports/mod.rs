//! Port traits that adapters and the host framework implement.

mod directory;
mod gateway;
mod payment_method;
mod settings;

pub use directory::StoreDirectory;
pub use gateway::PaymentGateway;
pub use payment_method::PaymentMethod;
pub use settings::SettingsStore;
