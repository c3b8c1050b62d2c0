//! Alert domain model
//!
//! Alert entries supplied by the application, their severity-driven visual
//! treatment, and the per-panel dismissal bookkeeping.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use gpui::{Rgba, SharedString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::components::primitives::icon::IconName;
use crate::theme::colors::DeckColors;

/// Stable identifier for one alert entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertId(String);

impl AlertId {
    /// Wrap an externally supplied identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlertId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Alert severity
///
/// Unrecognized or absent severities deserialize to `General` and get the
/// neutral visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Error,
    Warning,
    Info,
    Success,
    #[default]
    #[serde(other)]
    General,
}

/// Visual treatment for one severity: icon plus palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityVisuals {
    /// Leading icon
    pub icon: IconName,
    /// Icon and emphasis color
    pub accent: Rgba,
    /// Card background
    pub surface: Rgba,
    /// Card border
    pub outline: Rgba,
}

impl AlertSeverity {
    /// Fixed severity → (icon, palette) lookup
    pub fn visuals(&self) -> SeverityVisuals {
        match self {
            AlertSeverity::Error => SeverityVisuals {
                icon: IconName::AlertCircle,
                accent: DeckColors::danger(),
                surface: DeckColors::danger_soft(),
                outline: DeckColors::danger_outline(),
            },
            AlertSeverity::Warning => SeverityVisuals {
                icon: IconName::AlertTriangle,
                accent: DeckColors::warning(),
                surface: DeckColors::warning_soft(),
                outline: DeckColors::warning_outline(),
            },
            AlertSeverity::Info => SeverityVisuals {
                icon: IconName::Info,
                accent: DeckColors::info(),
                surface: DeckColors::info_soft(),
                outline: DeckColors::info_outline(),
            },
            AlertSeverity::Success => SeverityVisuals {
                icon: IconName::CheckCircle,
                accent: DeckColors::success(),
                surface: DeckColors::success_soft(),
                outline: DeckColors::success_outline(),
            },
            AlertSeverity::General => SeverityVisuals {
                icon: IconName::Bell,
                accent: DeckColors::neutral(),
                surface: DeckColors::neutral_soft(),
                outline: DeckColors::neutral_outline(),
            },
        }
    }
}

/// Caller-supplied action attached to an alert
///
/// The callback is an opaque capability: the panel invokes it with no
/// payload and makes no attempt to observe or contain its effects.
#[derive(Clone)]
pub struct AlertAction {
    /// Button label
    pub label: SharedString,
    on_activate: Rc<dyn Fn()>,
}

impl AlertAction {
    pub fn new(label: impl Into<SharedString>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_activate: Rc::new(on_activate),
        }
    }

    /// Invoke the caller's callback with no payload
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

/// One unit of system-alert data supplied for display
///
/// Absent fields deserialize to blanks and render blank; there is no error
/// path for malformed entries.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertEntry {
    pub id: AlertId,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    #[serde(skip)]
    pub action: Option<AlertAction>,
}

impl AlertEntry {
    /// Create an entry with a freshly minted id
    pub fn new(severity: AlertSeverity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::random(),
            severity,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Success, title, message)
    }

    /// Attach a caller-supplied action
    pub fn with_action(mut self, action: AlertAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Ephemeral record of alert ids hidden from view
///
/// Owned by a single mounted panel: created empty, grows monotonically via
/// `dismiss`, never persisted, discarded with the panel. An id in the set
/// is never rendered, whether or not it still appears in the input list.
#[derive(Debug, Default)]
pub struct DismissalSet {
    hidden: HashSet<AlertId>,
}

impl DismissalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide `id`. Returns false when the id was already hidden (no-op).
    pub fn dismiss(&mut self, id: &AlertId) -> bool {
        self.hidden.insert(id.clone())
    }

    pub fn is_dismissed(&self, id: &AlertId) -> bool {
        self.hidden.contains(id)
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}

/// Entries that survive dismissal filtering, in input order
pub fn visible_alerts<'a>(entries: &'a [AlertEntry], dismissed: &DismissalSet) -> Vec<&'a AlertEntry> {
    entries
        .iter()
        .filter(|entry| !dismissed.is_dismissed(&entry.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn sample_entries() -> Vec<AlertEntry> {
        vec![
            AlertEntry {
                id: AlertId::new("a"),
                ..AlertEntry::error("Disk failure", "Volume /dev/sda1 reported errors")
            },
            AlertEntry {
                id: AlertId::new("b"),
                ..AlertEntry::warning("High memory", "Memory usage above 90%")
            },
            AlertEntry {
                id: AlertId::new("c"),
                ..AlertEntry::info("Update available", "Version 2.4 is ready to install")
            },
        ]
    }

    #[test]
    fn severity_lookup_matches_fixed_table() {
        let cases = [
            (AlertSeverity::Error, IconName::AlertCircle, DeckColors::danger()),
            (AlertSeverity::Warning, IconName::AlertTriangle, DeckColors::warning()),
            (AlertSeverity::Info, IconName::Info, DeckColors::info()),
            (AlertSeverity::Success, IconName::CheckCircle, DeckColors::success()),
            (AlertSeverity::General, IconName::Bell, DeckColors::neutral()),
        ];
        for (severity, icon, accent) in cases {
            let visuals = severity.visuals();
            assert_eq!(visuals.icon, icon);
            assert_eq!(visuals.accent, accent);
        }
    }

    #[test]
    fn unknown_severity_deserializes_to_general() {
        let entry: AlertEntry =
            serde_json::from_str(r#"{"id":"x","severity":"meltdown","title":"t","message":"m"}"#)
                .expect("deserialize entry");
        assert_eq!(entry.severity, AlertSeverity::General);
    }

    #[test]
    fn absent_fields_deserialize_to_blanks() {
        let entry: AlertEntry = serde_json::from_str("{}").expect("deserialize empty entry");
        assert_eq!(entry.severity, AlertSeverity::General);
        assert!(entry.title.is_empty());
        assert!(entry.message.is_empty());
        assert!(entry.action.is_none());
    }

    #[test]
    fn dismissed_ids_are_filtered_at_any_position() {
        let entries = sample_entries();
        for target in ["a", "b", "c"] {
            let mut dismissed = DismissalSet::new();
            dismissed.dismiss(&AlertId::new(target));
            let visible = visible_alerts(&entries, &dismissed);
            assert_eq!(visible.len(), 2);
            assert!(visible.iter().all(|entry| entry.id.as_str() != target));
        }
    }

    #[test]
    fn dismissal_preserves_input_order() {
        let entries = sample_entries();
        let mut dismissed = DismissalSet::new();
        dismissed.dismiss(&AlertId::new("b"));
        let visible = visible_alerts(&entries, &dismissed);
        let ids: Vec<_> = visible.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn dismissing_twice_is_a_no_op() {
        let entries = sample_entries();
        let mut dismissed = DismissalSet::new();
        assert!(dismissed.dismiss(&AlertId::new("a")));
        assert!(!dismissed.dismiss(&AlertId::new("a")));
        assert_eq!(dismissed.len(), 1);
        assert_eq!(visible_alerts(&entries, &dismissed).len(), 2);
    }

    #[test]
    fn empty_and_fully_dismissed_lists_are_indistinguishable() {
        let dismissed = DismissalSet::new();
        assert!(visible_alerts(&[], &dismissed).is_empty());

        let entries = sample_entries();
        let mut dismissed = DismissalSet::new();
        for entry in &entries {
            dismissed.dismiss(&entry.id);
        }
        assert!(visible_alerts(&entries, &dismissed).is_empty());
    }

    #[test]
    fn action_activation_invokes_callback_once_per_call() {
        let count = Rc::new(Cell::new(0u32));
        let counter = count.clone();
        let action = AlertAction::new("Retry", move || counter.set(counter.get() + 1));

        let mut dismissed = DismissalSet::new();
        action.activate();
        assert_eq!(count.get(), 1);
        action.activate();
        assert_eq!(count.get(), 2);
        // Activation never touches dismissal state.
        assert!(dismissed.is_empty());
        dismissed.dismiss(&AlertId::new("a"));
        action.activate();
        assert_eq!(dismissed.len(), 1);
    }
}
