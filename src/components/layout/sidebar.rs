//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Page;
use crate::components::primitives::icon::Icon;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{t, Locale};
use crate::theme::colors::DeckColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, page: Page, locale: Locale, active_page: Page) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let entities = self.entities.clone();

        let text_color = if is_active {
            DeckColors::accent()
        } else {
            DeckColors::text_secondary()
        };

        let border_color = if is_active {
            DeckColors::accent()
        } else {
            gpui::rgba(0x00000000)
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(if is_active {
                gpui::rgba(0x3b82f615)
            } else {
                gpui::rgba(0x00000000)
            })
            .border_l_2()
            .border_color(border_color)
            .flex()
            .items_center()
            .gap_2()
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0x3b82f60c)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(Icon::new(page.icon()).size(px(15.0)).color(text_color))
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(DeckColors::sidebar_bg())
            .border_r_1()
            .border_color(DeckColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                Page::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, locale, active_page)),
            )
    }
}
