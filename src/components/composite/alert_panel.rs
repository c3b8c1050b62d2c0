//! Alert Panel Component
//!
//! Renders the system alert feed with per-alert dismissal. Dismissal is
//! view-local: hiding an entry never mutates the feed itself, so an entry
//! still present in the feed stays hidden only because its id remains in
//! this panel's dismissal set.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::icon::{Icon, IconName};
use crate::domain::alert::{visible_alerts, AlertEntry, AlertId, DismissalSet};
use crate::i18n::{t, Locale};
use crate::theme::colors::DeckColors;

/// Alert panel component
pub struct AlertPanel {
    entities: AppEntities,
    /// Ids hidden in this mounted panel; starts empty on construction
    dismissed: DismissalSet,
}

impl AlertPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe feed changes
        cx.observe(&entities.alerts, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            dismissed: DismissalSet::new(),
        }
    }

    fn dismiss(&mut self, id: &AlertId, cx: &mut Context<Self>) {
        if self.dismissed.dismiss(id) {
            tracing::debug!(alert = %id, "alert dismissed");
        }
        cx.notify();
    }

    fn render_entry(&self, entry: AlertEntry, cx: &mut Context<Self>) -> impl IntoElement {
        let visuals = entry.severity.visuals();
        let id = entry.id.clone();
        let action = entry.action.clone();

        let mut body = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_color(DeckColors::text_primary())
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(entry.title.clone()),
            )
            .child(
                div()
                    .text_color(DeckColors::text_secondary())
                    .text_size(px(12.0))
                    .child(entry.message.clone()),
            );

        if let Some(action) = action {
            let label = action.label.clone();
            body = body.child(
                div().mt_1().child(
                    Button::secondary(
                        SharedString::from(format!("alert-action-{}", entry.id)),
                        label,
                    )
                    .size(ButtonSize::Small)
                    // Forwarded verbatim: whatever the callback does (or
                    // raises) is the caller's concern.
                    .on_click(move |_event: &ClickEvent, _window, _cx| action.activate()),
                ),
            );
        }

        div()
            .id(SharedString::from(format!("alert-{}", entry.id)))
            .w_full()
            .flex()
            .items_start()
            .gap_3()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(visuals.outline)
            .bg(visuals.surface)
            .child(
                div()
                    .pt_px()
                    .child(Icon::new(visuals.icon).size(px(18.0)).color(visuals.accent)),
            )
            .child(body)
            .child(
                div()
                    .id(SharedString::from(format!("alert-dismiss-{}", entry.id)))
                    .p_1()
                    .rounded_sm()
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0x00000011)))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.dismiss(&id, cx);
                    }))
                    .child(Icon::new(IconName::Close).size(px(14.0)).color(DeckColors::text_muted())),
            )
    }

    /// Placeholder shown when nothing survives filtering. An empty feed and
    /// a fully dismissed feed land here alike.
    fn render_empty(&self, locale: Locale) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .py_8()
            .child(Icon::new(IconName::Bell).size(px(28.0)).color(DeckColors::text_muted()))
            .child(
                div()
                    .text_color(DeckColors::text_primary())
                    .text_size(px(14.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(t(locale, "alerts-empty-title")),
            )
            .child(
                div()
                    .text_color(DeckColors::text_muted())
                    .text_size(px(12.0))
                    .child(t(locale, "alerts-empty-message")),
            )
    }
}

impl Render for AlertPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        // Clone the surviving entries out of the feed so the read borrow
        // ends before per-entry listeners are built.
        let entries: Vec<AlertEntry> = {
            let alerts = self.entities.alerts.read(cx);
            visible_alerts(alerts.entries(), &self.dismissed)
                .into_iter()
                .cloned()
                .collect()
        };

        let mut panel = div().w_full().flex().flex_col().gap_3().child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_color(DeckColors::text_primary())
                        .text_size(px(15.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(t(locale, "alerts-heading")),
                )
                .child(
                    div()
                        .text_color(DeckColors::text_muted())
                        .text_size(px(12.0))
                        .child(format!("({})", entries.len())),
                ),
        );

        if entries.is_empty() {
            panel = panel.child(self.render_empty(locale));
        } else {
            let rendered: Vec<_> = entries
                .into_iter()
                .map(|entry| self.render_entry(entry, cx).into_any_element())
                .collect();
            panel = panel.children(rendered);
        }

        panel
    }
}
