//! Header Component
//!
//! Top application bar with brand block, tagline, and the locale toggle.

use gpui::{
    div, px, rgba, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::ArancelColors;

pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

/// Logo square next to the localized title and subtitle.
fn render_brand(title: SharedString, subtitle: SharedString) -> impl IntoElement {
    let logo = div()
        .size(px(36.0))
        .rounded_md()
        .bg(ArancelColors::accent())
        .text_color(ArancelColors::text_light())
        .font_weight(FontWeight::BOLD)
        .flex()
        .items_center()
        .justify_center()
        .child("$");

    let name_block = div()
        .flex()
        .flex_col()
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(ArancelColors::text_header())
                .child(title),
        )
        .child(
            div()
                .text_size(px(11.0))
                .text_color(rgba(0xcbd5e1ff))
                .child(subtitle),
        );

    div()
        .flex()
        .items_center()
        .gap_3()
        .child(logo)
        .child(name_block)
}

/// Pill that flips between es-CO and en-US on click.
fn render_locale_pill(label: &'static str, entities: AppEntities) -> impl IntoElement {
    div()
        .id("locale-toggle")
        .px_3()
        .py_1()
        .rounded_md()
        .text_size(px(13.0))
        .text_color(ArancelColors::text_header())
        .bg(rgba(0xffffff22))
        .cursor_pointer()
        .hover(|style| style.bg(rgba(0xffffff44)))
        .on_click(move |_event: &ClickEvent, _window, cx| {
            entities.i18n.update(cx, |i18n, cx| {
                i18n.toggle_locale();
                cx.notify();
            });
        })
        .child(label)
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        let right_side = div()
            .flex()
            .items_center()
            .gap_6()
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(rgba(0xcbd5e1ff))
                    .child(t(locale, "app-tagline")),
            )
            .child(render_locale_pill(
                locale.display_name(),
                self.entities.clone(),
            ));

        div()
            .h(px(64.0))
            .w_full()
            .px_4()
            .bg(ArancelColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .child(render_brand(
                t(locale, "app-title"),
                t(locale, "app-subtitle"),
            ))
            .child(right_side)
    }
}
