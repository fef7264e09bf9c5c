//! One overlay row: `[icon][name][alias][metric]` on the shared grid.

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::layout::GridColumns;
use crate::logging;
use crate::presentation::RowPresentation;

/// Receives `true` on pointer enter and `false` on leave
pub type OnRowHover = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;
pub type OnRowMouseDown = Box<dyn Fn(&MouseDownEvent, &mut Window, &mut App) + 'static>;

/// Fixed-height row. Every cell is rendered even when its text is empty, so
/// columns line up across the whole list.
#[derive(IntoElement)]
pub struct TagRow {
    row: RowPresentation,
    columns: GridColumns,
    height: f32,
    on_hover: Option<OnRowHover>,
    on_mouse_down: Option<OnRowMouseDown>,
}

impl TagRow {
    pub fn new(row: RowPresentation, columns: GridColumns, height: f32) -> Self {
        Self {
            row,
            columns,
            height,
            on_hover: None,
            on_mouse_down: None,
        }
    }

    pub fn on_hover(mut self, callback: OnRowHover) -> Self {
        self.on_hover = Some(callback);
        self
    }

    pub fn on_mouse_down(mut self, callback: OnRowMouseDown) -> Self {
        self.on_mouse_down = Some(callback);
        self
    }
}

impl RenderOnce for TagRow {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let row = self.row;
        let columns = self.columns;
        let index = row.index;
        let disabled = row.disabled;

        let icon = div()
            .w(px(columns.icon))
            .flex_shrink_0()
            .flex()
            .items_center()
            .justify_center()
            .text_color(rgb(row.icon.color))
            .child(row.icon.text);

        // Name takes the remaining width and is clipped, never ellipsized
        let name = div()
            .flex_1()
            .min_w(px(0.))
            .overflow_hidden()
            .whitespace_nowrap()
            .text_color(rgb(row.name.color))
            .when(!disabled, |d| d.font_weight(FontWeight::MEDIUM))
            .child(row.name.text);

        // Pre-truncated from the width estimate; text_ellipsis covers glyphs
        // wider than the estimate
        let alias = div()
            .w(px(columns.alias))
            .flex_shrink_0()
            .overflow_hidden()
            .text_ellipsis()
            .whitespace_nowrap()
            .text_color(rgb(row.alias.color))
            .child(row.alias.text);

        let metric = div()
            .w(px(columns.metric))
            .flex_shrink_0()
            .flex()
            .justify_end()
            .whitespace_nowrap()
            .text_color(rgb(row.metric.color))
            .child(row.metric.text);

        let mut container = div()
            .id(ElementId::NamedInteger("tag-row".into(), index as u64))
            .w_full()
            .h(px(self.height))
            .px(px(columns.gap))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(columns.gap))
            .bg(rgba(row.background_rgba))
            .border_b_1()
            .border_color(rgb(row.border))
            .text_sm()
            .cursor_pointer()
            .child(icon)
            .child(name)
            .child(alias)
            .child(metric);

        if let Some(callback) = self.on_hover {
            container = container.on_hover(move |hovered: &bool, window, cx| {
                if *hovered {
                    logging::log_mouse_enter(index, None);
                } else {
                    logging::log_mouse_leave(index, None);
                }
                callback(hovered, window, cx);
            });
        }

        if let Some(callback) = self.on_mouse_down {
            container = container.on_mouse_down(MouseButton::Left, move |event, window, cx| {
                callback(event, window, cx);
            });
        }

        container
    }
}
