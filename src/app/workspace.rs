//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header, sidebar, and
//! the routed page content.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::app::navigation::Page;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::overview::page::OverviewPage;
use crate::features::registration::page::RegistrationPage;
use crate::theme::colors::DeckColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views, created lazily and cached so panel-local state (such as
    // alert dismissals) survives navigation away and back.
    overview_page: Option<Entity<OverviewPage>>,
    registration_page: Option<Entity<RegistrationPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Overview is the landing page
        let overview_page = Some(cx.new(|cx| OverviewPage::new(entities.clone(), cx)));

        // Observe navigation for page changes
        cx.observe(&entities.nav, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            overview_page,
            registration_page: None,
        }
    }

    /// Get or create the view for the given page
    fn get_or_create_page(&mut self, page: Page, cx: &mut Context<Self>) -> gpui::AnyElement {
        match page {
            Page::Overview => {
                let view = self
                    .overview_page
                    .get_or_insert_with(|| cx.new(|cx| OverviewPage::new(self.entities.clone(), cx)));
                view.clone().into_any_element()
            }
            Page::Registration => {
                let view = self.registration_page.get_or_insert_with(|| {
                    cx.new(|cx| RegistrationPage::new(self.entities.clone(), cx))
                });
                view.clone().into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeckColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(DeckColors::content_bg())
                            .child(content),
                    ),
            )
    }
}
