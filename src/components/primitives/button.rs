//! Button Component
//!
//! Push button with variant and size presets.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::ArancelColors;

/// Color treatment applied to the button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Dark slate, for the main action
    #[default]
    Primary,
    Secondary,
    Danger,
    /// Label only, no fill
    Ghost,
}

impl ButtonVariant {
    fn background(&self) -> Rgba {
        match self {
            ButtonVariant::Primary => ArancelColors::button_primary_bg(),
            ButtonVariant::Secondary => gpui::rgba(0xe2e8f0ff),
            ButtonVariant::Danger => ArancelColors::button_danger_bg(),
            ButtonVariant::Ghost => gpui::rgba(0x00000000),
        }
    }

    fn label_color(&self) -> Rgba {
        match self {
            ButtonVariant::Primary => ArancelColors::button_primary_text(),
            ButtonVariant::Secondary => ArancelColors::text_primary(),
            ButtonVariant::Danger => ArancelColors::button_danger_text(),
            ButtonVariant::Ghost => ArancelColors::button_ghost_text(),
        }
    }

    fn hover_background(&self) -> Rgba {
        match self {
            ButtonVariant::Primary => gpui::rgba(0x1e293bff),
            ButtonVariant::Secondary => gpui::rgba(0xcbd5e1ff),
            ButtonVariant::Danger => gpui::rgba(0xdc2626ff),
            ButtonVariant::Ghost => gpui::rgba(0xf1f5f9ff),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn padding(&self) -> (Pixels, Pixels) {
        match self {
            ButtonSize::Small => (px(8.0), px(4.0)),
            ButtonSize::Medium => (px(16.0), px(8.0)),
            ButtonSize::Large => (px(24.0), px(12.0)),
        }
    }

    fn font_size(&self) -> Pixels {
        match self {
            ButtonSize::Small => px(12.0),
            ButtonSize::Medium => px(14.0),
            ButtonSize::Large => px(16.0),
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            full_width: false,
            on_click: None,
        }
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stretch the button to the container width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Button {
            id,
            label,
            variant,
            size,
            disabled,
            full_width,
            on_click,
        } = self;
        let (pad_x, pad_y) = size.padding();

        div()
            .id(id)
            .px(pad_x)
            .py(pad_y)
            .bg(variant.background())
            .text_color(variant.label_color())
            .text_size(size.font_size())
            .rounded_md()
            .flex()
            .justify_center()
            .when(full_width, |s| s.w_full())
            .when(disabled, |s| s.opacity(0.5))
            .when(!disabled, |s| {
                s.cursor_pointer()
                    .hover(move |style| style.bg(variant.hover_background()))
                    .when_some(on_click, |s, handler| s.on_click(handler))
            })
            .child(label)
    }
}
