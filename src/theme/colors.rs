//! Colors - Opsdeck Theme Colors

use gpui::{rgb, Rgba};

/// Opsdeck color palette - All colors are accessed via associated functions
pub struct DeckColors;

impl DeckColors {
    // Primary colors
    /// Header background - dark slate
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    /// Primary accent - blue (buttons, active steps, progress fill)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }
    /// Neutral - Gray (alerts without a recognized severity)
    pub fn neutral() -> Rgba { rgb(0x6b7280) }

    // Soft status surfaces (alert card backgrounds)
    /// Success surface
    pub fn success_soft() -> Rgba { rgb(0xf0fdf4) }
    /// Warning surface
    pub fn warning_soft() -> Rgba { rgb(0xfffbeb) }
    /// Danger surface
    pub fn danger_soft() -> Rgba { rgb(0xfef2f2) }
    /// Info surface
    pub fn info_soft() -> Rgba { rgb(0xeff6ff) }
    /// Neutral surface
    pub fn neutral_soft() -> Rgba { rgb(0xf9fafb) }

    // Soft status outlines (alert card borders)
    /// Success outline
    pub fn success_outline() -> Rgba { rgb(0xbbf7d0) }
    /// Warning outline
    pub fn warning_outline() -> Rgba { rgb(0xfde68a) }
    /// Danger outline
    pub fn danger_outline() -> Rgba { rgb(0xfecaca) }
    /// Info outline
    pub fn info_outline() -> Rgba { rgb(0xbfdbfe) }
    /// Neutral outline
    pub fn neutral_outline() -> Rgba { rgb(0xe5e7eb) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    /// Danger button text
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
}
