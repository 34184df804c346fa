//! DataTable Component
//!
//! Table over the in-memory catalog datasets. Columns carry their own
//! cell renderer, so each panel declares its layout once and feeds
//! filtered rows on every search keystroke.

use gpui::{
    div, prelude::*, px, AnyElement, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::theme::colors::ArancelColors;

const HEADER_HEIGHT: f32 = 40.0;
const ROW_MIN_HEIGHT: f32 = 36.0;

/// Width of a single column
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share leftover space, never narrower than `min` pixels
    Flex { min: f32 },
}

pub struct Column<R> {
    pub label: SharedString,
    pub width: ColumnWidth,
    render: Box<dyn Fn(&R) -> AnyElement + Send + Sync>,
}

impl<R: 'static> Column<R> {
    pub fn new(
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::Flex { min: 100.0 },
            render: Box::new(render),
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }
}

/// Padded cell container sized per the column width
fn cell(width: ColumnWidth) -> Div {
    let base = div().px_3().text_sm().overflow_hidden();
    match width {
        ColumnWidth::Fixed(w) => base.w(px(w)),
        ColumnWidth::Flex { min } => base.flex_1().min_w(px(min)),
    }
}

pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    empty_message: SharedString,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            empty_message: "Sin datos".into(),
        }
    }

    /// Swap the column set, used when the locale changes
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the visible rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    fn header(&self) -> Div {
        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(ArancelColors::table_header_bg())
            .border_b_1()
            .border_color(ArancelColors::border())
            .flex()
            .items_center()
            .children(self.columns.iter().map(|col| {
                cell(col.width)
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(ArancelColors::text_secondary())
                    .child(col.label.clone())
            }))
    }

    fn body(&self) -> AnyElement {
        if self.rows.is_empty() {
            return div()
                .h(px(96.0))
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(ArancelColors::text_muted())
                .child(self.empty_message.clone())
                .into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .children(self.rows.iter().enumerate().map(|(ix, row)| {
                let zebra = if ix % 2 == 0 {
                    ArancelColors::content_bg()
                } else {
                    ArancelColors::table_row_alt()
                };

                div()
                    .min_h(px(ROW_MIN_HEIGHT))
                    .w_full()
                    .bg(zebra)
                    .hover(|style| style.bg(ArancelColors::table_row_hover()))
                    .border_b_1()
                    .border_color(ArancelColors::border())
                    .flex()
                    .items_center()
                    .children(self.columns.iter().map(|col| {
                        cell(col.width)
                            .py_2()
                            .text_color(ArancelColors::text_primary())
                            .child((col.render)(row))
                    }))
            }))
            .into_any_element()
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .bg(ArancelColors::content_bg())
            .border_1()
            .border_color(ArancelColors::border())
            .rounded_md()
            .overflow_hidden()
            .flex()
            .flex_col()
            .child(self.header())
            .child(self.body())
    }
}

/// Build a table entity from a column set and initial rows
pub fn data_table<R: Clone + Send + Sync + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|_cx| DataTable::new(columns, rows))
}
