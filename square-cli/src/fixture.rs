//! In-memory store directory seeded from command-line arguments.

use square_types::{
    AddressId, AddressRecord, CountryId, CurrencyCode, Customer, CustomerId, StateId,
    StoreDirectory,
};

/// One customer, one billing address, one state and country. Enough store
/// data to drive a sandbox charge from the command line.
pub struct SeededDirectory {
    customer: Customer,
    address: AddressRecord,
    region: String,
    country: String,
    currency: CurrencyCode,
}

pub struct SeedAddress {
    pub line1: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
}

impl SeededDirectory {
    pub fn new(email: String, address: SeedAddress, currency: CurrencyCode) -> Self {
        let customer_id = CustomerId::new();
        let address_id = AddressId::new();
        let state_id = StateId::new();
        let country_id = CountryId::new();

        Self {
            customer: Customer {
                id: customer_id,
                email,
                billing_address_id: Some(address_id),
                shipping_address_id: None,
            },
            address: AddressRecord {
                id: address_id,
                line1: address.line1,
                line2: String::new(),
                city: address.city,
                postal_code: address.postal_code,
                state_id,
                country_id,
            },
            region: address.region,
            country: address.country,
            currency,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer.id
    }
}

#[async_trait::async_trait]
impl StoreDirectory for SeededDirectory {
    async fn customer(&self, id: CustomerId) -> Option<Customer> {
        (self.customer.id == id).then(|| self.customer.clone())
    }

    async fn address(&self, id: AddressId) -> Option<AddressRecord> {
        (self.address.id == id).then(|| self.address.clone())
    }

    async fn state_abbreviation(&self, id: StateId) -> Option<String> {
        (self.address.state_id == id).then(|| self.region.clone())
    }

    async fn country_code(&self, id: CountryId) -> Option<String> {
        (self.address.country_id == id).then(|| self.country.clone())
    }

    async fn primary_currency(&self) -> Option<CurrencyCode> {
        Some(self.currency.clone())
    }
}
