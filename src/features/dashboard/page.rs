//! Dashboard Page
//!
//! Summary figures, illustrative charts, and quick links.

use gpui::{
    div, prelude::*, px, relative, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::composite::stat::Stat;
use crate::components::primitives::link::ExternalLink;
use crate::domain::catalog::{
    LEGAL_RANGE, QUICK_LINKS, SECTOR_EXAMPLES, TARIFF_TYPES, TRADE_AGREEMENTS,
};
use crate::i18n::t;
use crate::theme::colors::ArancelColors;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_share_bar(
        &self,
        label: SharedString,
        fraction: f32,
        trailing: Option<SharedString>,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .min_w(px(120.0))
                    .text_sm()
                    .text_color(ArancelColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .flex_1()
                    .h(px(8.0))
                    .rounded_full()
                    .bg(ArancelColors::table_row_hover())
                    .child(
                        div()
                            .w(relative(fraction))
                            .h_full()
                            .rounded_full()
                            .bg(ArancelColors::accent()),
                    ),
            )
            .when_some(trailing, |s, text| {
                s.child(
                    div()
                        .min_w(px(40.0))
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(ArancelColors::text_primary())
                        .child(text),
                )
            })
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let kind_share = 1.0 / TARIFF_TYPES.len() as f32;

        div()
            .id("dashboard-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "dash-summary")),
            )
            // Headline figures
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(Stat::new(
                        t(locale, "dash-stat-kinds"),
                        TARIFF_TYPES.len().to_string(),
                    ))
                    .child(Stat::new(
                        t(locale, "dash-stat-sectors"),
                        SECTOR_EXAMPLES.len().to_string(),
                    ))
                    .child(Stat::new(
                        t(locale, "dash-stat-range"),
                        format!("{}% – {}%", LEGAL_RANGE.min, LEGAL_RANGE.max),
                    ))
                    .child(Stat::new(
                        t(locale, "dash-stat-agreements"),
                        TRADE_AGREEMENTS.len().to_string(),
                    )),
            )
            // Illustrative charts
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(
                        div().flex_1().child(
                            Card::titled(t(locale, "dash-distribution")).children(
                                TARIFF_TYPES.iter().map(|info| {
                                    self.render_share_bar(
                                        SharedString::from(
                                            info.name.trim_start_matches("Arancel "),
                                        ),
                                        kind_share,
                                        None,
                                    )
                                }),
                            ),
                        ),
                    )
                    .child(
                        div().flex_1().child(
                            Card::titled(t(locale, "dash-range-chart"))
                                .child(self.render_share_bar(
                                    t(locale, "dash-range-min"),
                                    0.0,
                                    Some(SharedString::from(format!("{}%", LEGAL_RANGE.min))),
                                ))
                                .child(self.render_share_bar(
                                    t(locale, "dash-range-max"),
                                    1.0,
                                    Some(SharedString::from(format!("{}%", LEGAL_RANGE.max))),
                                )),
                        ),
                    ),
            )
            // Quick links
            .child(
                Card::titled(t(locale, "dash-quick-links")).children(
                    QUICK_LINKS.iter().enumerate().map(|(ix, link)| {
                        ExternalLink::new(("quick-link", ix), link.label, link.url)
                    }),
                ),
            )
    }
}
