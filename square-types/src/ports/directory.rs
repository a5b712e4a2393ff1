//! Read-side port onto the host store's directory data.

use crate::domain::{
    AddressId, AddressRecord, CountryId, CurrencyCode, Customer, CustomerId, StateId,
};

/// Lookups the request assembler needs from the host store.
///
/// `None` means the referenced record does not exist; the assembler turns
/// that into a fatal dependency error before anything is sent remotely.
#[async_trait::async_trait]
pub trait StoreDirectory: Send + Sync + 'static {
    /// Customer record by id.
    async fn customer(&self, id: CustomerId) -> Option<Customer>;

    /// Raw address record by id.
    async fn address(&self, id: AddressId) -> Option<AddressRecord>;

    /// State/province abbreviation for a state record.
    async fn state_abbreviation(&self, id: StateId) -> Option<String>;

    /// ISO 3166-1 alpha-2 code for a country record.
    async fn country_code(&self, id: CountryId) -> Option<String>;

    /// The primary store currency all charges are made in.
    async fn primary_currency(&self) -> Option<CurrencyCode>;
}
