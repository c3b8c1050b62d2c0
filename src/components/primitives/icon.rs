//! Icon Component
//!
//! Renders one of the embedded SVG icons at a given size and tint.

use gpui::{px, svg, App, IntoElement, Pixels, RenderOnce, Rgba, SharedString, Styled, Window};

use crate::theme::colors::DeckColors;

/// Named icons bundled with the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    AlertCircle,
    AlertTriangle,
    Info,
    CheckCircle,
    Bell,
    Check,
    Close,
    Dashboard,
    UserPlus,
}

impl IconName {
    /// Path of the embedded SVG for this icon
    pub fn path(self) -> SharedString {
        match self {
            IconName::AlertCircle => "icons/alert-circle.svg",
            IconName::AlertTriangle => "icons/alert-triangle.svg",
            IconName::Info => "icons/info.svg",
            IconName::CheckCircle => "icons/check-circle.svg",
            IconName::Bell => "icons/bell.svg",
            IconName::Check => "icons/check.svg",
            IconName::Close => "icons/x.svg",
            IconName::Dashboard => "icons/layout-dashboard.svg",
            IconName::UserPlus => "icons/user-plus.svg",
        }
        .into()
    }
}

/// A sized, tinted icon
#[derive(IntoElement)]
pub struct Icon {
    name: IconName,
    size: Pixels,
    color: Rgba,
}

impl Icon {
    /// Create a new icon with the default size and tint
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: px(16.0),
            color: DeckColors::text_secondary(),
        }
    }

    /// Set the rendered size (icons are square)
    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    /// Set the tint color
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        svg()
            .path(self.name.path())
            .size(self.size)
            .text_color(self.color)
            .flex_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_maps_to_a_distinct_asset() {
        let names = [
            IconName::AlertCircle,
            IconName::AlertTriangle,
            IconName::Info,
            IconName::CheckCircle,
            IconName::Bell,
            IconName::Check,
            IconName::Close,
            IconName::Dashboard,
            IconName::UserPlus,
        ];
        let mut paths: Vec<_> = names.iter().map(|name| name.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), names.len());
    }

    #[test]
    fn icon_paths_resolve_to_embedded_assets() {
        use crate::assets::Assets;
        for name in [IconName::AlertCircle, IconName::Bell, IconName::Check] {
            assert!(
                Assets::get(&name.path()).is_some(),
                "missing embedded asset for {name:?}"
            );
        }
    }
}
