//! Card Component

use gpui::{
    div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::theme::colors::ArancelColors;

/// A bordered content panel with an optional title row
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            children: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<SharedString>) -> Self {
        Self {
            title: Some(title.into()),
            children: Vec::new(),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .bg(ArancelColors::content_bg())
            .border_1()
            .border_color(ArancelColors::border())
            .rounded_lg()
            .p_5()
            .flex()
            .flex_col()
            .gap_3()
            .when_some(self.title, |s, title| {
                s.child(
                    div()
                        .text_lg()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(ArancelColors::text_primary())
                        .child(title),
                )
            })
            .children(self.children)
    }
}
