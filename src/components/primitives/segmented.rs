//! Segmented Control Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ArancelColors;

/// One selectable segment
#[derive(Debug, Clone)]
pub struct SegmentedOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl SegmentedOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A horizontal switch between a small, fixed set of options
#[derive(IntoElement)]
pub struct Segmented {
    id: ElementId,
    options: Vec<SegmentedOption>,
    selected: SharedString,
    on_select: Option<Rc<dyn Fn(&str, &mut Window, &mut App)>>,
}

impl Segmented {
    /// Create a new segmented control
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: SharedString::default(),
            on_select: None,
        }
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SegmentedOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<SharedString>) -> Self {
        self.selected = value.into();
        self
    }

    /// Set the selection handler, called with the option's value
    pub fn on_select(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Segmented {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected.clone();
        let on_select = self.on_select.clone();

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .gap(px(2.0))
            .p(px(2.0))
            .bg(ArancelColors::table_header_bg())
            .border_1()
            .border_color(ArancelColors::border())
            .rounded_md()
            .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                let is_active = option.value == selected;
                let value = option.value.clone();
                let handler = on_select.clone();

                div()
                    .id(ix)
                    .px_3()
                    .py_1()
                    .rounded_sm()
                    .text_sm()
                    .cursor_pointer()
                    .when(is_active, |s| {
                        s.bg(ArancelColors::button_primary_bg())
                            .text_color(ArancelColors::button_primary_text())
                    })
                    .when(!is_active, |s| {
                        s.text_color(ArancelColors::text_secondary())
                            .hover(|s| s.bg(ArancelColors::table_row_hover()))
                    })
                    .when_some(handler, |s, handler| {
                        s.on_click(move |_event, window, cx| {
                            handler(&value, window, cx);
                        })
                    })
                    .child(option.label)
            }))
    }
}
