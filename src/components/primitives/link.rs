//! ExternalLink Component

use gpui::{
    div, prelude::*, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ArancelColors;

/// A link that opens its URL in the system browser
#[derive(IntoElement)]
pub struct ExternalLink {
    id: ElementId,
    label: SharedString,
    url: SharedString,
}

impl ExternalLink {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        url: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

impl RenderOnce for ExternalLink {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let url = self.url.clone();

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .text_sm()
            .text_color(ArancelColors::info())
            .cursor_pointer()
            .hover(|s| s.text_color(ArancelColors::accent()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                cx.open_url(&url);
            })
            .child(self.label)
            .child(div().text_xs().child("↗"))
    }
}
