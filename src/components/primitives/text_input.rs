//! TextInput Component
//!
//! Single-line text input with minimal key handling.

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ArancelColors;

pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    disabled: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            disabled: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    fn with_value(mut self, value: String) -> Self {
        self.value = value;
        self
    }

    fn with_placeholder(mut self, placeholder: SharedString) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Register the handler called after every edit
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Mutate the value, then notify the handler and re-render
    fn apply_edit(&mut self, cx: &mut Context<Self>, edit: impl FnOnce(&mut String)) {
        edit(&mut self.value);
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }

        // Leave shortcuts alone
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => self.apply_edit(cx, |value| {
                value.pop();
            }),
            "space" => self.apply_edit(cx, |value| value.push(' ')),
            _ => {
                if let Some(typed) = keystroke.key_char.clone() {
                    self.apply_edit(cx, |value| value.push_str(&typed));
                }
            }
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = !self.disabled && self.focus_handle.is_focused(window);

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), ArancelColors::input_placeholder())
        } else {
            (
                SharedString::from(self.value.clone()),
                ArancelColors::text_primary(),
            )
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_click(cx.listener(|this, _event, window, cx| {
                if !this.disabled {
                    window.focus(&this.focus_handle);
                    cx.notify();
                }
            }))
            .min_w(px(200.0))
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(if is_focused {
                ArancelColors::border_focus()
            } else {
                ArancelColors::input_border()
            })
            .bg(if self.disabled {
                ArancelColors::table_header_bg()
            } else {
                ArancelColors::input_bg()
            })
            .when(self.disabled, |s| s.opacity(0.6))
            .text_sm()
            .flex()
            .items_center()
            .child(div().text_color(text_color).child(display_text))
            .when(is_focused, |s| {
                s.child(div().w(px(1.0)).h(px(16.0)).bg(ArancelColors::accent()))
            })
    }
}

/// Build a text input entity seeded with a value and placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let (id, value, placeholder) = (id.into(), value.into(), placeholder.into());

    cx.new(|cx| {
        TextInput::new(id, cx)
            .with_value(value)
            .with_placeholder(placeholder)
    })
}
