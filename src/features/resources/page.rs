//! Resources Page
//!
//! External guides plus key legal notes.

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::primitives::link::ExternalLink;
use crate::domain::catalog::RESOURCE_GUIDES;
use crate::i18n::t;
use crate::theme::colors::ArancelColors;

/// Resources page component
pub struct ResourcesPage {
    entities: AppEntities,
}

impl ResourcesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_note(&self, text: impl Into<gpui::SharedString>) -> impl IntoElement {
        div()
            .text_sm()
            .text_color(ArancelColors::text_primary())
            .child(text.into())
    }
}

impl Render for ResourcesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("resources-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_start()
                    .gap_4()
                    .child(
                        div().flex_1().min_w(px(320.0)).child(
                            Card::titled(t(locale, "res-guides"))
                                .children(RESOURCE_GUIDES.iter().enumerate().map(
                                    |(ix, guide)| {
                                        ExternalLink::new(
                                            ("resource-guide", ix),
                                            guide.label,
                                            guide.url,
                                        )
                                    },
                                ))
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(ArancelColors::text_secondary())
                                        .child(t(locale, "res-disclaimer")),
                                ),
                        ),
                    )
                    .child(
                        div().flex_1().min_w(px(320.0)).child(
                            Card::titled(t(locale, "res-notes"))
                                .child(self.render_note(t(locale, "res-note-range")))
                                .child(self.render_note(t(locale, "res-note-cif")))
                                .child(self.render_note(t(locale, "res-note-unit")))
                                .child(self.render_note(t(locale, "res-note-origin"))),
                        ),
                    ),
            )
    }
}
