//! Badge Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled,
    Window,
};

use crate::theme::colors::ArancelColors;

/// A small rounded label pill
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    bg: Rgba,
    fg: Rgba,
}

impl Badge {
    /// Neutral gray badge
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            bg: ArancelColors::table_row_hover(),
            fg: ArancelColors::text_primary(),
        }
    }

    /// Amber badge, used for news sources
    pub fn amber(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            bg: ArancelColors::badge_bg(),
            fg: ArancelColors::badge_text(),
        }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(self.bg)
            .text_color(self.fg)
            .text_xs()
            .child(self.label)
    }
}
