//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-us")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-cn")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Pick an initial locale from the system locale tag
    pub fn detect() -> Self {
        let tag = locale_config::Locale::current().to_string();
        if tag.starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Opsdeck Dashboard", "Opsdeck 仪表盘"));

    // Navigation
    map.insert("nav-overview", ("Overview", "概览"));
    map.insert("nav-registration", ("Registration", "注册"));

    // Alert panel
    map.insert("alerts-heading", ("System Alerts", "系统警报"));
    map.insert("alerts-empty-title", ("No alerts", "暂无警报"));
    map.insert(
        "alerts-empty-message",
        (
            "You're all caught up. New system alerts will show up here.",
            "一切正常。新的系统警报将显示在这里。",
        ),
    );

    // Registration page
    map.insert("registration-heading", ("Registration", "注册"));
    map.insert(
        "registration-subtitle",
        (
            "Complete the three steps below to activate your workspace.",
            "完成以下三个步骤以激活您的工作区。",
        ),
    );
    map.insert(
        "registration-counter",
        ("Step {current} of {total}", "第 {current} 步，共 {total} 步"),
    );

    // Actions
    map.insert("action-back", ("Back", "上一步"));
    map.insert("action-continue", ("Continue", "下一步"));
    map.insert("action-restore-defaults", ("Restore defaults", "恢复默认设置"));

    // Startup alerts
    map.insert(
        "alert-settings-title",
        ("Settings could not be loaded", "设置加载失败"),
    );
    map.insert(
        "alert-settings-message",
        (
            "Your saved settings were unreadable, so the defaults are in use.",
            "已保存的设置无法读取，当前使用默认设置。",
        ),
    );
    map.insert(
        "alert-registration-title",
        ("Registration incomplete", "注册未完成"),
    );
    map.insert(
        "alert-registration-message",
        (
            "Finish the remaining registration steps to unlock your workspace.",
            "完成剩余的注册步骤以解锁您的工作区。",
        ),
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_with(locale: Locale, key: &str, args: &[(&str, String)]) -> SharedString {
    let mut text = t(locale, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    SharedString::from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").to_string(), "no-such-key");
    }

    #[test]
    fn placeholders_are_substituted() {
        let counter = t_with(
            Locale::EnUS,
            "registration-counter",
            &[("current", "2".to_string()), ("total", "3".to_string())],
        );
        assert_eq!(counter.to_string(), "Step 2 of 3");
    }

    #[test]
    fn locale_round_trips_through_serde() {
        let json = serde_json::to_string(&Locale::ZhCN).expect("serialize locale");
        assert_eq!(json, "\"zh-cn\"");
        let locale: Locale = serde_json::from_str(&json).expect("deserialize locale");
        assert_eq!(locale, Locale::ZhCN);
    }
}
