//! Composite Components
//!
//! Components assembled from the primitives: the alert panel and the
//! registration progress indicator.

pub mod alert_panel;
pub mod registration_progress;
