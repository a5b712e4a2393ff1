//! Customer and address records as the host store directory exposes them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Creates a new random CustomerId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CustomerId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for an address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(Uuid);

impl AddressId {
    /// Creates a new random AddressId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AddressId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a state/province record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(Uuid);

impl StateId {
    /// Creates a new random StateId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(Uuid);

impl CountryId {
    /// Creates a new random CountryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CountryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer record as loaded from the store directory.
///
/// The buyer email is used verbatim; no validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub billing_address_id: Option<AddressId>,
    pub shipping_address_id: Option<AddressId>,
}

/// A raw address row. State and country are references that still need
/// resolving through the directory; the one-page checkout form requires
/// every field, so the references are not optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub postal_code: String,
    pub state_id: StateId,
    pub country_id: CountryId,
}

/// An address with its region and country resolved to external codes,
/// ready for transmission to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    /// State/province abbreviation, e.g. "CA".
    pub region: String,
    /// ISO 3166-1 alpha-2 country code, e.g. "US".
    pub country_code: String,
    pub postal_code: String,
}
