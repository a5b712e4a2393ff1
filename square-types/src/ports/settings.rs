//! Port onto the host's generic settings store.

use crate::domain::SquareSettings;
use crate::error::SettingsError;

/// Loads and saves the processor settings.
///
/// Settings are re-read on every checkout operation; no caching is promised
/// here. Values are stored verbatim.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync + 'static {
    async fn load(&self) -> Result<SquareSettings, SettingsError>;

    async fn save(&self, settings: &SquareSettings) -> Result<(), SettingsError>;
}
