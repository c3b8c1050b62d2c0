//! AlertsState - Application-Owned Alert Feed
//!
//! The shell pushes entries here and panels render them. Dismissal is NOT
//! tracked here: hiding an alert is per-panel view state, and the feed is
//! left untouched by it.

use crate::domain::alert::{AlertAction, AlertEntry, AlertId, AlertSeverity};

/// State for the alert feed
#[derive(Default)]
pub struct AlertsState {
    entries: Vec<AlertEntry>,
}

impl AlertsState {
    /// Push a new alert, returning its minted id
    pub fn push(
        &mut self,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> AlertId {
        self.push_entry(AlertEntry::new(severity, title, message))
    }

    /// Push a new alert carrying a caller-supplied action
    pub fn push_with_action(
        &mut self,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
        action: AlertAction,
    ) -> AlertId {
        self.push_entry(AlertEntry::new(severity, title, message).with_action(action))
    }

    /// Push a prepared entry
    pub fn push_entry(&mut self, entry: AlertEntry) -> AlertId {
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Remove an entry outright (the supplying side resolving an alert)
    pub fn resolve(&mut self, id: &AlertId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != *id);
        self.entries.len() != before
    }

    /// All entries, in arrival order
    pub fn entries(&self) -> &[AlertEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_starts_empty() {
        let state = AlertsState::default();
        assert!(state.is_empty());
    }

    #[test]
    fn pushed_alerts_get_unique_ids() {
        let mut state = AlertsState::default();
        let a = state.push(AlertSeverity::Info, "first", "");
        let b = state.push(AlertSeverity::Info, "second", "");
        assert_ne!(a, b);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn resolve_removes_only_the_matching_entry() {
        let mut state = AlertsState::default();
        let a = state.push(AlertSeverity::Warning, "kept", "");
        let b = state.push(AlertSeverity::Warning, "resolved", "");
        assert!(state.resolve(&b));
        assert!(!state.resolve(&b));
        assert_eq!(state.len(), 1);
        assert_eq!(state.entries()[0].id, a);
    }
}
