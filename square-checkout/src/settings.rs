//! In-memory settings store.

use std::sync::Mutex;

use square_types::{SettingsError, SettingsStore, SquareSettings};

/// Settings store backed by process memory. Used by the CLI, where settings
/// come from the environment once at startup, and by tests.
pub struct StaticSettingsStore {
    settings: Mutex<SquareSettings>,
}

impl StaticSettingsStore {
    pub fn new(settings: SquareSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl Default for StaticSettingsStore {
    fn default() -> Self {
        Self::new(SquareSettings::default())
    }
}

#[async_trait::async_trait]
impl SettingsStore for StaticSettingsStore {
    async fn load(&self) -> Result<SquareSettings, SettingsError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| SettingsError::Load(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, settings: &SquareSettings) -> Result<(), SettingsError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| SettingsError::Save(e.to_string()))?;
        *guard = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = StaticSettingsStore::default();

        let mut settings = SquareSettings::default();
        settings.use_sandbox = false;
        settings.access_token = "EAAA-live".to_string();
        settings.location_id = "L999".to_string();
        store.save(&settings).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(!loaded.use_sandbox);
        assert_eq!(loaded.access_token, "EAAA-live");
        assert_eq!(loaded.location_id, "L999");
    }

    #[tokio::test]
    async fn test_defaults_start_in_sandbox() {
        let store = StaticSettingsStore::default();
        let loaded = store.load().await.unwrap();
        assert!(loaded.use_sandbox);
        assert!(loaded.access_token.is_empty());
    }
}
