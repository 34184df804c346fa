//! Sidebar Component
//!
//! Left navigation rail listing the application panels.

use gpui::{
    div, prelude::*, px, rgba, App, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::i18n::t;
use crate::theme::colors::ArancelColors;

const RAIL_WIDTH: f32 = 200.0;

pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

/// One navigation row. The active row gets a left accent edge and tint.
#[derive(IntoElement)]
struct NavItem {
    page: ActivePage,
    label: SharedString,
    is_active: bool,
    entities: AppEntities,
}

impl NavItem {
    fn palette(&self) -> (Rgba, Rgba, Rgba) {
        let clear = rgba(0x00000000);
        if self.is_active {
            (
                ArancelColors::accent_soft(),
                ArancelColors::accent(),
                ArancelColors::accent(),
            )
        } else {
            (clear, ArancelColors::text_secondary(), clear)
        }
    }
}

impl RenderOnce for NavItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (background, foreground, edge) = self.palette();
        let NavItem {
            page,
            label,
            entities,
            ..
        } = self;

        div()
            .id(SharedString::from(format!("nav-{}", page.slug())))
            .w_full()
            .px_4()
            .py_2()
            .border_l_2()
            .border_color(edge)
            .bg(background)
            .text_color(foreground)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|style| style.bg(ArancelColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.tabs.update(cx, |tabs, cx| {
                    tabs.set_active_page(page);
                    cx.notify();
                });
            })
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().min_w(px(20.0)).child(page.icon()))
                    .child(label),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.tabs.read(cx).active_page;

        let items = ActivePage::all().iter().map(|&page| NavItem {
            page,
            label: t(locale, page.title_key()),
            is_active: page == active_page,
            entities: self.entities.clone(),
        });

        div()
            .w(px(RAIL_WIDTH))
            .h_full()
            .bg(ArancelColors::sidebar_bg())
            .border_r_1()
            .border_color(ArancelColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(items)
    }
}
