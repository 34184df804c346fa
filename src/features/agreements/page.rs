//! Agreements Page
//!
//! Searchable catalog of preferential trade agreements.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::catalog::{filter_agreements, TradeAgreement};
use crate::i18n::t;
use crate::theme::colors::ArancelColors;

/// Agreements page component
pub struct AgreementsPage {
    entities: AppEntities,
    search_input: Entity<TextInput>,
    results: Vec<&'static TradeAgreement>,
}

impl AgreementsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let search_input = text_input(
            "agreements-search",
            "",
            t(locale, "agr-search-placeholder"),
            cx,
        );

        // Refilter as the query changes
        cx.observe(&search_input, |this: &mut Self, input, cx| {
            this.results = filter_agreements(input.read(cx).value());
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |this: &mut Self, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.search_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "agr-search-placeholder"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            search_input,
            results: filter_agreements(""),
        }
    }

    fn render_labelled_line(
        &self,
        label: SharedString,
        content: impl Into<SharedString>,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .text_sm()
            .child(
                div()
                    .text_color(ArancelColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .flex_1()
                    .text_color(ArancelColors::text_primary())
                    .child(content.into()),
            )
    }

    fn render_agreement_card(
        &self,
        agreement: &'static TradeAgreement,
        origin_note: SharedString,
        countries_label: SharedString,
        benefit_label: SharedString,
    ) -> impl IntoElement {
        div().flex_1().min_w(px(320.0)).child(
            Card::titled(agreement.name)
                .child(self.render_labelled_line(countries_label, agreement.countries.join(", ")))
                .child(self.render_labelled_line(benefit_label, agreement.benefit))
                .child(
                    div()
                        .text_xs()
                        .text_color(ArancelColors::text_secondary())
                        .child(origin_note),
                ),
        )
    }
}

impl Render for AgreementsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let origin_note = t(locale, "agr-origin-note");
        let countries_label = t(locale, "agr-countries");
        let benefit_label = t(locale, "agr-benefit");

        div()
            .id("agreements-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(div().max_w(px(420.0)).child(self.search_input.clone()))
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .children(self.results.iter().map(|agreement| {
                        self.render_agreement_card(
                            agreement,
                            origin_note.clone(),
                            countries_label.clone(),
                            benefit_label.clone(),
                        )
                    })),
            )
    }
}
