//! Registration Page
//!
//! Hosts the registration progress indicator plus the step controls that
//! drive it.

use gpui::{div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::composite::registration_progress::RegistrationProgress;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::constants::{COMPACT_PROGRESS_BREAKPOINT, PAGE_MAX_WIDTH};
use crate::i18n::t;
use crate::theme::colors::DeckColors;

/// Registration page component
pub struct RegistrationPage {
    entities: AppEntities,
}

impl RegistrationPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe step changes
        cx.observe(&entities.registration, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for RegistrationPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let registration = self.entities.registration.read(cx);
        let current_step = registration.current_step;
        let is_first = registration.is_first();
        let is_last = registration.is_last();

        // Narrow windows get the single-step summary instead of the row.
        let compact = window.viewport_size().width < px(COMPACT_PROGRESS_BREAKPOINT);

        let back_entities = self.entities.clone();
        let continue_entities = self.entities.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .p_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_color(DeckColors::text_primary())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, "registration-heading")),
                    )
                    .child(
                        div()
                            .text_color(DeckColors::text_secondary())
                            .text_size(px(13.0))
                            .child(t(locale, "registration-subtitle")),
                    ),
            )
            .child(
                div()
                    .max_w(px(PAGE_MAX_WIDTH))
                    .child(RegistrationProgress::new(current_step, locale).compact(compact)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Button::new("registration-back", t(locale, "action-back"))
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Medium)
                            .disabled(is_first)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                back_entities.registration.update(cx, |registration, cx| {
                                    if registration.back() {
                                        cx.notify();
                                    }
                                });
                                persist_step(&back_entities, cx);
                            }),
                    )
                    .child(
                        Button::new("registration-continue", t(locale, "action-continue"))
                            .variant(ButtonVariant::Primary)
                            .size(ButtonSize::Medium)
                            .disabled(is_last)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                continue_entities.registration.update(cx, |registration, cx| {
                                    if registration.advance() {
                                        cx.notify();
                                    }
                                });
                                persist_step(&continue_entities, cx);
                            }),
                    ),
            )
    }
}

/// Mirror the reached step into the persisted settings
fn persist_step(entities: &AppEntities, cx: &mut gpui::App) {
    let step = entities.registration.read(cx).current_step;
    entities.settings.update(cx, |settings, _cx| {
        if settings.config.registration_step != step {
            settings.config.registration_step = step;
            settings.persist();
        }
    });
}
