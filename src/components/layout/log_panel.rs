//! Log Panel Component
//!
//! Collapsible activity feed docked under the content area.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Div, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, Stateful, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::{t, Locale};
use crate::state::log_state::LogEntry;
use crate::theme::colors::ArancelColors;
use crate::utils::format::format_time_ms;

const COLLAPSED_HEIGHT: f32 = 32.0;
const EXPANDED_HEIGHT: f32 = 150.0;
const VISIBLE_ENTRIES: usize = 50;

/// Activity feed panel
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: false,
        }
    }

    fn render_toolbar(&self, locale: Locale, count: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.clone();
        let arrow = if self.expanded { "▼" } else { "▲" };

        div()
            .h(px(COLLAPSED_HEIGHT))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(gpui::rgba(0xffffff22))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(ArancelColors::text_light())
                            .child(t(locale, "log-title")),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(ArancelColors::text_muted())
                            .child(format!("({count})")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        toolbar_button("activity-clear", t(locale, "log-clear")).on_click(
                            move |_event, _window, cx| {
                                logs.update(cx, |feed, cx| {
                                    feed.clear();
                                    cx.notify();
                                });
                            },
                        ),
                    )
                    .child(toolbar_button("activity-toggle", arrow).on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.expanded = !this.expanded;
                            cx.notify();
                        },
                    ))),
            )
    }
}

fn toolbar_button(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Stateful<Div> {
    div()
        .id(id.into())
        .px_2()
        .py_1()
        .rounded_sm()
        .text_size(px(11.0))
        .text_color(ArancelColors::text_muted())
        .cursor_pointer()
        .hover(|s| s.bg(gpui::rgba(0xffffff22)))
        .child(label.into())
}

fn render_entry(entry: LogEntry) -> impl IntoElement {
    let time = format_time_ms(&entry.timestamp);

    div()
        .w_full()
        .flex()
        .items_center()
        .gap_2()
        .py_px()
        .text_size(px(11.0))
        .child(
            div()
                .min_w(px(85.0))
                .text_color(ArancelColors::text_muted())
                .child(time),
        )
        .child(
            div()
                .min_w(px(45.0))
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(entry.level.color())
                .child(entry.level.label()),
        )
        .child(
            div()
                .flex_1()
                .text_size(px(12.0))
                .text_color(ArancelColors::text_light())
                .child(entry.message),
        )
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (count, recent) = {
            let feed = self.entities.logs.read(cx);
            let recent: Vec<LogEntry> = if self.expanded {
                feed.entries().iter().rev().take(VISIBLE_ENTRIES).cloned().collect()
            } else {
                Vec::new()
            };
            (feed.len(), recent)
        };

        let height = if self.expanded {
            EXPANDED_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        };

        div()
            .h(px(height))
            .w_full()
            .bg(ArancelColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(self.render_toolbar(locale, count, cx))
            .when(self.expanded, |panel| {
                panel.child(
                    div()
                        .id("activity-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(recent.into_iter().map(render_entry)),
                )
            })
    }
}
