//! Registration Progress Component
//!
//! Pure view over the fixed registration flow: step circles with
//! connectors, a linear progress bar, and a step counter. Holds no state
//! of its own; every render is a function of the constructor inputs.

use gpui::{
    div, prelude::*, px, relative, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::components::primitives::icon::{Icon, IconName};
use crate::domain::registration::{progress_fraction, StepInfo, StepStatus, REGISTRATION_STEPS, STEP_COUNT};
use crate::i18n::{t_with, Locale};
use crate::theme::colors::DeckColors;

/// Registration progress indicator
#[derive(IntoElement)]
pub struct RegistrationProgress {
    current_step: i32,
    total_steps: i32,
    compact: bool,
    locale: Locale,
}

impl RegistrationProgress {
    pub fn new(current_step: i32, locale: Locale) -> Self {
        Self {
            current_step,
            total_steps: STEP_COUNT,
            compact: false,
            locale,
        }
    }

    /// Override the step total used for the progress fraction
    pub fn total_steps(mut self, total_steps: i32) -> Self {
        self.total_steps = total_steps;
        self
    }

    /// Narrow-layout rendering: only the active step's text is shown
    /// instead of the full step row. Same inputs, alternate markup.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn render_step(&self, step: &StepInfo) -> impl IntoElement {
        let status = StepStatus::of(step.number, self.current_step);

        let circle = match status {
            StepStatus::Completed => div()
                .size(px(32.0))
                .rounded_full()
                .bg(DeckColors::accent())
                .flex()
                .items_center()
                .justify_center()
                .child(Icon::new(IconName::Check).size(px(16.0)).color(DeckColors::text_header())),
            StepStatus::Active => div()
                .size(px(32.0))
                .rounded_full()
                .bg(DeckColors::accent())
                .flex()
                .items_center()
                .justify_center()
                .text_color(DeckColors::text_header())
                .text_size(px(13.0))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(step.number.to_string()),
            StepStatus::Pending => div()
                .size(px(32.0))
                .rounded_full()
                .bg(DeckColors::neutral_soft())
                .border_1()
                .border_color(DeckColors::border())
                .flex()
                .items_center()
                .justify_center()
                .text_color(DeckColors::text_muted())
                .text_size(px(13.0))
                .child(step.number.to_string()),
        };

        let title_color = match status {
            StepStatus::Pending => DeckColors::text_muted(),
            _ => DeckColors::text_primary(),
        };

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(circle)
            .child(
                div()
                    .text_color(title_color)
                    .text_size(px(12.0))
                    .font_weight(if status == StepStatus::Active {
                        gpui::FontWeight::SEMIBOLD
                    } else {
                        gpui::FontWeight::NORMAL
                    })
                    .child(step.title),
            )
            .child(
                div()
                    .text_color(DeckColors::text_muted())
                    .text_size(px(11.0))
                    .child(step.description),
            )
    }

    fn render_step_row(&self) -> impl IntoElement {
        let mut row = div().w_full().flex().items_center();

        for (index, step) in REGISTRATION_STEPS.iter().enumerate() {
            if index > 0 {
                // A connector is "completed" only when the step before it is.
                let previous = &REGISTRATION_STEPS[index - 1];
                let completed =
                    StepStatus::of(previous.number, self.current_step) == StepStatus::Completed;
                row = row.child(
                    div()
                        .flex_1()
                        .h(px(2.0))
                        .mx_2()
                        .mb_8()
                        .rounded_full()
                        .bg(if completed {
                            DeckColors::accent()
                        } else {
                            DeckColors::border()
                        }),
                );
            }
            row = row.child(self.render_step(step));
        }

        row
    }

    /// Compact alternative: the active step's text alone. Out-of-range
    /// steps have no text to show and leave the line blank.
    fn render_active_step(&self) -> impl IntoElement {
        let active = REGISTRATION_STEPS
            .iter()
            .find(|step| step.number == self.current_step);

        let mut summary = div().flex().flex_col().gap_1();
        if let Some(step) = active {
            summary = summary
                .child(
                    div()
                        .text_color(DeckColors::text_primary())
                        .text_size(px(13.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(step.title),
                )
                .child(
                    div()
                        .text_color(DeckColors::text_muted())
                        .text_size(px(11.0))
                        .child(step.description),
                );
        }
        summary
    }
}

impl RenderOnce for RegistrationProgress {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // Unclamped on purpose: out-of-range steps overflow or empty the bar.
        let fraction = progress_fraction(self.current_step, self.total_steps);
        let counter = t_with(
            self.locale,
            "registration-counter",
            &[
                ("current", self.current_step.to_string()),
                ("total", self.total_steps.to_string()),
            ],
        );

        let steps = if self.compact {
            self.render_active_step().into_any_element()
        } else {
            self.render_step_row().into_any_element()
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_4()
            .child(steps)
            .child(
                div()
                    .w_full()
                    .h(px(6.0))
                    .rounded_full()
                    .bg(DeckColors::border())
                    .child(
                        div()
                            .h_full()
                            .rounded_full()
                            .bg(DeckColors::accent())
                            .w(relative(fraction)),
                    ),
            )
            .child(
                div()
                    .text_color(DeckColors::text_secondary())
                    .text_size(px(12.0))
                    .child(counter),
            )
    }
}
