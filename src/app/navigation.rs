//! Navigation - Page Routing
//!
//! Defines the pages available in the application.

use crate::components::primitives::icon::IconName;

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Overview page with the system alert feed
    #[default]
    Overview,
    /// Registration onboarding page
    Registration,
}

impl Page {
    /// Get the sidebar icon for the page
    pub fn icon(&self) -> IconName {
        match self {
            Page::Overview => IconName::Dashboard,
            Page::Registration => IconName::UserPlus,
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Overview => "nav-overview",
            Page::Registration => "nav-registration",
        }
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [Page] {
        &[Page::Overview, Page::Registration]
    }
}
