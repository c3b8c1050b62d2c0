//! NavState - Active Page Selection

use crate::app::navigation::Page;

/// State for sidebar navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Currently active page
    pub active_page: Page,
}

impl NavState {
    /// Set the active page (from sidebar click)
    pub fn set_active_page(&mut self, page: Page) {
        self.active_page = page;
    }
}
