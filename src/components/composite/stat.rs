//! Stat Component

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::ArancelColors;

/// A small labelled figure used on the dashboard summary row
#[derive(IntoElement)]
pub struct Stat {
    label: SharedString,
    value: SharedString,
}

impl Stat {
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl RenderOnce for Stat {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex_1()
            .bg(ArancelColors::content_bg())
            .border_1()
            .border_color(ArancelColors::border())
            .rounded_lg()
            .p_4()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(ArancelColors::text_secondary())
                    .child(self.label),
            )
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ArancelColors::text_primary())
                    .child(self.value),
            )
    }
}
