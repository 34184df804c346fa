//! Tariff Library Page
//!
//! Filterable table of the three duty kinds plus sector examples.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::badge::Badge;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::catalog::{
    filter_tariff_types, SectorExample, TariffTypeInfo, SECTOR_EXAMPLES, TARIFF_TYPES,
};
use crate::i18n::{t, Locale};
use crate::theme::colors::ArancelColors;

/// Tariff library page component
pub struct LibraryPage {
    entities: AppEntities,
    search_input: Entity<TextInput>,
    table: Entity<DataTable<TariffTypeInfo>>,
}

impl LibraryPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;

        let table = data_table(Self::build_columns(locale), TARIFF_TYPES.to_vec(), cx);
        let search_input = text_input(
            "library-search",
            "",
            t(locale, "lib-search-placeholder"),
            cx,
        );

        // Typing refilters the table in place
        let table_handle = table.clone();
        search_input.update(cx, |input, _| {
            input.on_change(move |query, cx| {
                let rows = filter_tariff_types(query).into_iter().copied().collect();
                table_handle.update(cx, |table, cx| {
                    table.set_rows(rows);
                    cx.notify();
                });
            });
        });

        // Relabel the table and placeholder when the locale flips
        cx.observe(&entities.i18n, |this: &mut Self, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.table.update(cx, |table, cx| {
                table.set_columns(Self::build_columns(locale));
                table.set_empty_message(t(locale, "table-no-data"));
                cx.notify();
            });
            this.search_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "lib-search-placeholder"));
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

    fn build_columns(locale: Locale) -> Vec<Column<TariffTypeInfo>> {
        vec![
            Column::new(t(locale, "col-kind"), |info: &TariffTypeInfo| {
                div()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(info.name)
                    .into_any_element()
            })
            .fixed_width(170.0),
            Column::new(t(locale, "col-description"), |info: &TariffTypeInfo| {
                div().child(info.description).into_any_element()
            })
            .flex_width(220.0),
            Column::new(t(locale, "col-basis"), |info: &TariffTypeInfo| {
                div().child(info.basis).into_any_element()
            })
            .flex_width(180.0),
            Column::new(t(locale, "col-example"), |info: &TariffTypeInfo| {
                div().child(info.example).into_any_element()
            })
            .flex_width(200.0),
            Column::new(t(locale, "col-usage"), |info: &TariffTypeInfo| {
                Badge::new(info.usage).into_any_element()
            })
            .flex_width(180.0),
        ]
    }

    fn render_sector_tile(&self, sector: &SectorExample) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(260.0))
            .p_3()
            .rounded_md()
            .bg(ArancelColors::table_row_alt())
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ArancelColors::text_primary())
                    .child(sector.sector),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(ArancelColors::text_primary())
                    .child(sector.products.join(", ")),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(ArancelColors::text_secondary())
                    .child(sector.observation),
            )
    }
}

impl Render for LibraryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .id("library-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(div().max_w(px(420.0)).child(self.search_input.clone()))
            .child(self.table.clone())
            .child(
                Card::titled(t(locale, "lib-sector-examples")).child(
                    div().w_full().flex().flex_wrap().gap_3().children(
                        SECTOR_EXAMPLES
                            .iter()
                            .map(|sector| self.render_sector_tile(sector)),
                    ),
                ),
            )
    }
}
