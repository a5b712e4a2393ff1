//! Processor settings and environment selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote API environment. Sandbox is for development and testing only;
/// production transactions charge a real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sandbox,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Settings as the store admin saves them: two parallel credential sets,
/// one per environment, switched by `use_sandbox`.
///
/// Saved verbatim to the host settings store; no token-format validation is
/// performed locally. An invalid token surfaces only as a remote
/// authentication failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareSettings {
    pub use_sandbox: bool,
    pub sandbox_access_token: String,
    pub sandbox_application_key: String,
    pub sandbox_location_id: String,
    pub access_token: String,
    pub application_key: String,
    pub location_id: String,
}

impl Default for SquareSettings {
    /// Install-time defaults: sandbox on, credentials unset.
    fn default() -> Self {
        Self {
            use_sandbox: true,
            sandbox_access_token: String::new(),
            sandbox_application_key: String::new(),
            sandbox_location_id: String::new(),
            access_token: String::new(),
            application_key: String::new(),
            location_id: String::new(),
        }
    }
}

/// The credential set for exactly one environment, resolved once per call.
///
/// Token, application key and location id are always selected together by
/// the same flag, so a sandbox token can never be paired with a production
/// location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCredentials {
    pub environment: Environment,
    pub access_token: String,
    pub application_key: String,
    pub location_id: String,
}

impl SquareSettings {
    /// Resolves the active credential set from the `use_sandbox` flag.
    pub fn credentials(&self) -> ProcessorCredentials {
        if self.use_sandbox {
            ProcessorCredentials {
                environment: Environment::Sandbox,
                access_token: self.sandbox_access_token.clone(),
                application_key: self.sandbox_application_key.clone(),
                location_id: self.sandbox_location_id.clone(),
            }
        } else {
            ProcessorCredentials {
                environment: Environment::Production,
                access_token: self.access_token.clone(),
                application_key: self.application_key.clone(),
                location_id: self.location_id.clone(),
            }
        }
    }
}
