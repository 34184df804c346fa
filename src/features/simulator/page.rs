//! Simulator Page
//!
//! Duty calculation form with live result and TXT export.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::primitives::button::Button;
use crate::components::primitives::segmented::{Segmented, SegmentedOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::tariff::TariffKind;
use crate::features::simulator::controller::SimulatorController;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::theme::colors::ArancelColors;
use crate::utils::format::format_money;

/// Simulator page component
pub struct SimulatorPage {
    entities: AppEntities,
    controller: SimulatorController,
    cif_input: Entity<TextInput>,
    units_input: Entity<TextInput>,
    ad_valorem_input: Entity<TextInput>,
    specific_input: Entity<TextInput>,
    preference_input: Entity<TextInput>,
}

impl SimulatorPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SimulatorController::new(entities.clone());

        let (kind, cif, units, ad_valorem, specific, preference) = {
            let state = entities.simulator.read(cx);
            (
                state.kind,
                state.cif_text.clone(),
                state.units_text.clone(),
                state.ad_valorem_text.clone(),
                state.specific_text.clone(),
                state.preference_text.clone(),
            )
        };

        let cif_input = text_input("sim-cif", cif, "", cx);
        let units_input = text_input("sim-units", units, "", cx);
        let ad_valorem_input = text_input("sim-ad-valorem", ad_valorem, "", cx);
        let specific_input = text_input("sim-specific", specific, "", cx);
        let preference_input = text_input("sim-preference", preference, "", cx);

        Self::bind(&cif_input, &entities, cx, |state, text| state.cif_text = text);
        Self::bind(&units_input, &entities, cx, |state, text| {
            state.units_text = text
        });
        Self::bind(&ad_valorem_input, &entities, cx, |state, text| {
            state.ad_valorem_text = text
        });
        Self::bind(&specific_input, &entities, cx, |state, text| {
            state.specific_text = text
        });
        Self::bind(&preference_input, &entities, cx, |state, text| {
            state.preference_text = text
        });

        ad_valorem_input.update(cx, |input, _| {
            input.set_disabled(!kind.uses_ad_valorem());
        });
        specific_input.update(cx, |input, _| {
            input.set_disabled(!kind.uses_specific());
        });

        // Keep rate fields enabled only where the kind uses them
        cx.observe(&entities.simulator, |this: &mut Self, simulator, cx| {
            let kind = simulator.read(cx).kind;
            this.ad_valorem_input.update(cx, |input, cx| {
                input.set_disabled(!kind.uses_ad_valorem());
                cx.notify();
            });
            this.specific_input.update(cx, |input, cx| {
                input.set_disabled(!kind.uses_specific());
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Export completion arrives through the activity feed
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            cif_input,
            units_input,
            ad_valorem_input,
            specific_input,
            preference_input,
        }
    }

    /// Mirror typed text into the simulator state
    fn bind(
        input: &Entity<TextInput>,
        entities: &AppEntities,
        cx: &mut Context<Self>,
        apply: impl Fn(&mut crate::state::simulator_state::SimulatorState, String) + 'static,
    ) {
        let simulator = entities.simulator.clone();
        input.update(cx, |input, _| {
            input.on_change(move |value, cx| {
                let text = value.to_string();
                simulator.update(cx, |state, cx| {
                    apply(state, text);
                    cx.notify();
                });
            });
        });
    }

    fn render_field(
        &self,
        label: SharedString,
        input: Entity<TextInput>,
        hint: Option<SharedString>,
    ) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(200.0))
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(ArancelColors::text_secondary())
                    .child(label),
            )
            .child(input)
            .when_some(hint, |s, hint| {
                s.child(
                    div()
                        .text_xs()
                        .text_color(ArancelColors::text_muted())
                        .child(hint),
                )
            })
    }

    fn render_result_row(
        &self,
        label: SharedString,
        value: String,
        emphasized: bool,
    ) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .when(emphasized, |s| s.text_lg())
            .child(
                div()
                    .text_color(if emphasized {
                        ArancelColors::text_primary()
                    } else {
                        ArancelColors::text_secondary()
                    })
                    .when(!emphasized, |s| s.text_sm())
                    .when(emphasized, |s| s.font_weight(gpui::FontWeight::SEMIBOLD))
                    .child(label),
            )
            .child(
                div()
                    .font_weight(if emphasized {
                        gpui::FontWeight::BOLD
                    } else {
                        gpui::FontWeight::SEMIBOLD
                    })
                    .text_color(ArancelColors::text_primary())
                    .child(value),
            )
    }
}

impl Render for SimulatorPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (kind, result) = {
            let state = self.entities.simulator.read(cx);
            (state.kind, state.result())
        };
        let exporting = cx
            .try_global::<ServiceHub>()
            .map(|hub| hub.is_exporting())
            .unwrap_or(false);

        let simulator = self.entities.simulator.clone();
        let kind_selector = Segmented::new("sim-kind")
            .options(
                TariffKind::all()
                    .iter()
                    .map(|k| SegmentedOption::new(k.id(), k.label()))
                    .collect(),
            )
            .selected(kind.id())
            .on_select(move |value, _window, cx| {
                let selected = TariffKind::all().iter().copied().find(|k| k.id() == value);
                if let Some(kind) = selected {
                    simulator.update(cx, |state, cx| {
                        state.set_kind(kind);
                        cx.notify();
                    });
                }
            });

        div()
            .id("simulator-page")
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
                    // Parameters
                    .child(
                        div().flex_1().child(
                            Card::titled(t(locale, "sim-parameters"))
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .gap_4()
                                        .child(
                                            div()
                                                .flex_1()
                                                .min_w(px(200.0))
                                                .flex()
                                                .flex_col()
                                                .gap_1()
                                                .child(
                                                    div()
                                                        .text_xs()
                                                        .text_color(
                                                            ArancelColors::text_secondary(),
                                                        )
                                                        .child(t(locale, "sim-kind")),
                                                )
                                                .child(kind_selector),
                                        )
                                        .child(self.render_field(
                                            t(locale, "sim-cif"),
                                            self.cif_input.clone(),
                                            None,
                                        )),
                                )
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .gap_4()
                                        .child(self.render_field(
                                            t(locale, "sim-units"),
                                            self.units_input.clone(),
                                            None,
                                        ))
                                        .child(self.render_field(
                                            t(locale, "sim-ad-valorem"),
                                            self.ad_valorem_input.clone(),
                                            None,
                                        )),
                                )
                                .child(
                                    div()
                                        .w_full()
                                        .flex()
                                        .gap_4()
                                        .child(self.render_field(
                                            t(locale, "sim-specific"),
                                            self.specific_input.clone(),
                                            None,
                                        ))
                                        .child(self.render_field(
                                            t(locale, "sim-preference"),
                                            self.preference_input.clone(),
                                            Some(t(locale, "sim-preference-hint")),
                                        )),
                                ),
                        ),
                    )
                    // Result
                    .child(
                        div().w(px(340.0)).child(
                            Card::titled(t(locale, "sim-result"))
                                .child(self.render_result_row(
                                    t(locale, "sim-base"),
                                    format_money(result.base),
                                    false,
                                ))
                                .child(self.render_result_row(
                                    t(locale, "sim-discount"),
                                    format_money(result.discount),
                                    false,
                                ))
                                .child(self.render_result_row(
                                    t(locale, "sim-total"),
                                    format_money(result.total),
                                    true,
                                ))
                                .child(
                                    Button::primary("sim-export", t(locale, "sim-export"))
                                        .full_width()
                                        .disabled(exporting)
                                        .on_click(cx.listener(
                                            |this, _event: &ClickEvent, _window, cx| {
                                                this.controller.export(cx);
                                            },
                                        )),
                                ),
                        ),
                    ),
            )
    }
}
