//! SettingsState - In-Memory Copy of the Persisted Configuration

use crate::domain::config::AppConfig;
use crate::utils::config_store::{self, SETTINGS_FILE};

/// State for the persisted configuration
pub struct SettingsState {
    pub config: AppConfig,
}

impl SettingsState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Write the current configuration to disk. Failures are logged, not
    /// surfaced: settings persistence never blocks the UI.
    pub fn persist(&self) {
        if let Err(error) = config_store::save_config(SETTINGS_FILE, &self.config) {
            tracing::warn!(%error, "failed to save settings");
        }
    }
}
