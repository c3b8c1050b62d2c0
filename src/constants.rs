//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Window width below which the registration progress switches to its
/// compact single-step rendering
pub const COMPACT_PROGRESS_BREAKPOINT: f32 = 760.0;

/// Widest a page column is allowed to grow
pub const PAGE_MAX_WIDTH: f32 = 920.0;
