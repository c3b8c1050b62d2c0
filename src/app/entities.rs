//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management, split by update frequency.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::state::{
    alerts_state::AlertsState, i18n_state::I18nState, nav_state::NavState,
    registration_state::RegistrationState, settings_state::SettingsState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted configuration
    pub settings: Entity<SettingsState>,
    /// System alert feed
    pub alerts: Entity<AlertsState>,
    /// Registration progress
    pub registration: Entity<RegistrationState>,
    /// Sidebar navigation state
    pub nav: Entity<NavState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(cx: &mut App, config: AppConfig) -> Self {
        Self {
            registration: cx.new(|_| RegistrationState::new(config.registration_step)),
            i18n: cx.new(|_| I18nState::new(config.locale)),
            settings: cx.new(|_| SettingsState::new(config)),
            alerts: cx.new(|_| AlertsState::default()),
            nav: cx.new(|_| NavState::default()),
        }
    }
}
