//! Application configuration persisted between sessions

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::Locale;

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Top-level persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display locale; initially follows the system locale
    pub locale: Locale,
    /// Last registration step the user reached (1-indexed)
    pub registration_step: i32,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::detect(),
            registration_step: 1,
            window: WindowConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            locale: Locale::ZhCN,
            registration_step: 2,
            window: WindowConfig {
                width: 1024.0,
                height: 640.0,
            },
        };
        let json = serde_json::to_string_pretty(&config).expect("serialize config");
        let parsed: AppConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"registration_step": 3}"#).expect("deserialize partial config");
        assert_eq!(parsed.registration_step, 3);
        assert_eq!(parsed.window, WindowConfig::default());
    }

    #[test]
    fn unknown_locale_is_rejected_not_misread() {
        // The caller falls back to AppConfig::default() when parsing fails.
        let result = serde_json::from_str::<AppConfig>(r#"{"locale": "fr-fr"}"#);
        assert!(result.is_err());
    }
}
