//! Classification Page
//!
//! Code structure explainer plus a subheading search over the example dataset.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::badge::Badge;
use crate::components::primitives::link::ExternalLink;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::catalog::{
    filter_tariff_codes, TariffCode, CLASSIFICATION_LEVELS, DIAN_LOOKUP, TARIFF_CODES,
};
use crate::i18n::{t, Locale};
use crate::theme::colors::ArancelColors;
use crate::utils::format::format_percent;

/// Classification page component
pub struct ClassificationPage {
    entities: AppEntities,
    search_input: Entity<TextInput>,
    table: Entity<DataTable<TariffCode>>,
}

impl ClassificationPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;

        let table = data_table(Self::build_columns(locale), TARIFF_CODES.to_vec(), cx);
        let search_input = text_input(
            "classification-search",
            "",
            t(locale, "class-search-placeholder"),
            cx,
        );

        let table_handle = table.clone();
        search_input.update(cx, |input, _| {
            input.on_change(move |query, cx| {
                let rows = filter_tariff_codes(query).into_iter().copied().collect();
                table_handle.update(cx, |table, cx| {
                    table.set_rows(rows);
                    cx.notify();
                });
            });
        });

        cx.observe(&entities.i18n, |this: &mut Self, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.table.update(cx, |table, cx| {
                table.set_columns(Self::build_columns(locale));
                table.set_empty_message(t(locale, "table-no-data"));
                cx.notify();
            });
            this.search_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "class-search-placeholder"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            search_input,
            table,
        }
    }

    fn build_columns(locale: Locale) -> Vec<Column<TariffCode>> {
        vec![
            Column::new(t(locale, "col-code"), |code: &TariffCode| {
                div()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(code.code)
                    .into_any_element()
            })
            .fixed_width(130.0),
            Column::new(t(locale, "col-description"), |code: &TariffCode| {
                div().child(code.description).into_any_element()
            })
            .flex_width(220.0),
            Column::new(t(locale, "col-unit"), |code: &TariffCode| {
                div().child(code.unit).into_any_element()
            })
            .fixed_width(70.0),
            Column::new(t(locale, "col-kind"), |code: &TariffCode| {
                div().child(code.kind.label()).into_any_element()
            })
            .fixed_width(110.0),
            Column::new(t(locale, "col-ad-valorem"), |code: &TariffCode| {
                let text = if code.ad_valorem_rate > 0.0 {
                    format_percent(code.ad_valorem_rate)
                } else {
                    "–".to_string()
                };
                div().child(text).into_any_element()
            })
            .fixed_width(150.0),
            Column::new(t(locale, "col-specific"), |code: &TariffCode| {
                let text = if code.specific_rate > 0.0 {
                    format!("{} USD/{}", code.specific_rate, code.unit)
                } else {
                    "–".to_string()
                };
                div().child(text).into_any_element()
            })
            .fixed_width(150.0),
        ]
    }

    fn render_level_row(&self, label: &'static str, value: &'static str) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(280.0))
            .flex()
            .items_start()
            .gap_3()
            .child(Badge::new(label))
            .child(
                div()
                    .text_sm()
                    .text_color(ArancelColors::text_primary())
                    .child(value),
            )
    }
}

impl Render for ClassificationPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("classification-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(
                Card::titled(t(locale, "class-structure"))
                    .child(
                        div().w_full().flex().flex_wrap().gap_3().children(
                            CLASSIFICATION_LEVELS
                                .iter()
                                .map(|level| self.render_level_row(level.label, level.value)),
                        ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(ArancelColors::text_secondary())
                                    .child(t(locale, "class-official")),
                            )
                            .child(ExternalLink::new(
                                "dian-lookup",
                                DIAN_LOOKUP.label,
                                DIAN_LOOKUP.url,
                            )),
                    ),
            )
            .child(
                Card::titled(t(locale, "class-search-title"))
                    .child(div().max_w(px(420.0)).child(self.search_input.clone()))
                    .child(self.table.clone()),
            )
    }
}
