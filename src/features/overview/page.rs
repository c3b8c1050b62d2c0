//! Overview Page
//!
//! Dashboard landing page hosting the system alert panel.

use gpui::{div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::composite::alert_panel::AlertPanel;
use crate::constants::PAGE_MAX_WIDTH;
use crate::i18n::t;
use crate::theme::colors::DeckColors;

/// Overview page component
pub struct OverviewPage {
    entities: AppEntities,
    alert_panel: Entity<AlertPanel>,
}

impl OverviewPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let alert_panel = cx.new(|cx| AlertPanel::new(entities.clone(), cx));

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            alert_panel,
        }
    }
}

impl Render for OverviewPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .p_6()
            .child(
                div()
                    .text_color(DeckColors::text_primary())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "nav-overview")),
            )
            .child(
                div()
                    .id("overview-scroll")
                    .flex_1()
                    .max_w(px(PAGE_MAX_WIDTH))
                    .overflow_y_scroll()
                    .child(self.alert_panel.clone()),
            )
    }
}
