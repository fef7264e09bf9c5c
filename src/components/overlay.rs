//! `TagOverlay` - the floating list view used for both panels.
//!
//! Wraps [`OverlayState`] and renders it as a top-layer panel pinned at the
//! host's anchor. Colors are re-resolved from the current theme on every
//! render; nothing resolved is kept between frames.

use gpui::*;
use std::rc::Rc;

use super::header_bar::HeaderBar;
use super::message_cell::MessageCell;
use super::tag_row::TagRow;
use crate::layout::LayoutConfig;
use crate::model::{Anchor, HeaderViewModel, PanelKind, RowViewModel};
use crate::overlay_state::{OverlayEvent, OverlayState};
use crate::presentation::{ListPresentation, RowPresentation};
use crate::theme::{current_theme, ThemeMode};

/// Optional direct callback, for hosts that don't subscribe to the entity
pub type OverlayCallback = Box<dyn Fn(&OverlayEvent) + 'static>;

pub struct TagOverlay {
    state: OverlayState,
    layout: LayoutConfig,
    scroll_handle: UniformListScrollHandle,
    focus_handle: FocusHandle,
    on_event: Option<OverlayCallback>,
}

impl EventEmitter<OverlayEvent> for TagOverlay {}

impl Focusable for TagOverlay {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl TagOverlay {
    pub fn new(kind: PanelKind, layout: LayoutConfig, mode: ThemeMode, cx: &mut Context<Self>) -> Self {
        Self {
            state: OverlayState::new(kind, mode),
            layout: layout.sanitized(),
            scroll_handle: UniformListScrollHandle::new(),
            focus_handle: cx.focus_handle(),
            on_event: None,
        }
    }

    pub fn on_event(mut self, callback: OverlayCallback) -> Self {
        self.on_event = Some(callback);
        self
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    fn emit(&mut self, event: Option<OverlayEvent>, cx: &mut Context<Self>) {
        if let Some(event) = event {
            if let Some(callback) = &self.on_event {
                callback(&event);
            }
            cx.emit(event);
        }
    }

    pub fn set_rows(&mut self, rows: Vec<RowViewModel>, cx: &mut Context<Self>) {
        let event = self.state.set_rows(rows);
        self.scroll_handle.scroll_to_item(0, ScrollStrategy::Top);
        self.emit(event, cx);
        cx.notify();
    }

    pub fn set_failed(&mut self, reason: impl Into<String>, cx: &mut Context<Self>) {
        let event = self.state.set_failed(reason);
        self.emit(event, cx);
        cx.notify();
    }

    pub fn set_header(&mut self, header: Option<HeaderViewModel>, cx: &mut Context<Self>) {
        self.state.set_header(header);
        cx.notify();
    }

    pub fn show_at(&mut self, anchor: Anchor, cx: &mut Context<Self>) {
        self.state.show_at(anchor);
        cx.notify();
    }

    pub fn hide(&mut self, cx: &mut Context<Self>) {
        let event = self.state.hide();
        self.emit(event, cx);
        cx.notify();
    }

    pub fn set_mode(&mut self, mode: ThemeMode, cx: &mut Context<Self>) {
        if self.state.set_mode(mode) {
            cx.notify();
        }
    }

    pub fn set_layout(&mut self, layout: LayoutConfig, cx: &mut Context<Self>) {
        self.layout = layout.sanitized();
        cx.notify();
    }

    pub fn select_next(&mut self, cx: &mut Context<Self>) {
        if let Some(index) = self.state.select_next() {
            self.scroll_handle.scroll_to_item(index, ScrollStrategy::Nearest);
            cx.notify();
        }
    }

    pub fn select_previous(&mut self, cx: &mut Context<Self>) {
        if let Some(index) = self.state.select_previous() {
            self.scroll_handle.scroll_to_item(index, ScrollStrategy::Nearest);
            cx.notify();
        }
    }

    /// Emit `SelectionConfirmed` for the selected row. Returns its index.
    pub fn confirm_selected(&mut self, cx: &mut Context<Self>) -> Option<usize> {
        let event = self.state.confirm_selected();
        let index = self.state.selection().selected().filter(|_| event.is_some());
        self.emit(event, cx);
        index
    }

    pub fn dismiss(&mut self, cx: &mut Context<Self>) {
        let hover_event = self.state.hide();
        self.emit(hover_event, cx);
        self.emit(Some(OverlayEvent::Dismissed), cx);
        cx.notify();
    }

    fn handle_hover(&mut self, index: usize, hovered: bool, cx: &mut Context<Self>) {
        let event = self.state.hover(index, hovered);
        if event.is_some() {
            self.emit(event, cx);
            cx.notify();
        }
    }

    fn handle_click(&mut self, index: usize, cx: &mut Context<Self>) {
        let event = self.state.click(index);
        self.emit(event, cx);
        cx.notify();
    }

    fn handle_header_action(&mut self, id: &str, cx: &mut Context<Self>) {
        let event = self.state.header_action(id);
        self.emit(event, cx);
    }

    fn handle_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        match event.keystroke.key.to_lowercase().as_str() {
            "up" | "arrowup" => self.select_previous(cx),
            "down" | "arrowdown" => self.select_next(cx),
            "enter" => {
                self.confirm_selected(cx);
            }
            "escape" => self.dismiss(cx),
            _ => cx.propagate(),
        }
    }

    fn render_rows(
        &self,
        rows: Vec<RowPresentation>,
        columns: crate::layout::GridColumns,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let row_height = self.layout.row_height;
        let rows = Rc::new(rows);
        let count = rows.len();

        uniform_list(
            "tag-overlay-rows",
            count,
            cx.processor(move |_this: &mut TagOverlay, visible_range, _window, cx| {
                visible_range
                    .filter_map(|ix| rows.get(ix).cloned())
                    .map(|row| {
                        let ix = row.index;
                        let hover_handler = cx.listener(
                            move |this: &mut TagOverlay, hovered: &bool, _window, cx| {
                                this.handle_hover(ix, *hovered, cx);
                            },
                        );
                        let click_handler = cx.listener(
                            move |this: &mut TagOverlay, _event: &MouseDownEvent, _window, cx| {
                                this.handle_click(ix, cx);
                            },
                        );
                        TagRow::new(row, columns, row_height)
                            .on_hover(Box::new(hover_handler))
                            .on_mouse_down(Box::new(click_handler))
                    })
                    .collect::<Vec<_>>()
            }),
        )
        .flex_1()
        .w_full()
        .track_scroll(&self.scroll_handle)
        .into_any_element()
    }
}

impl Render for TagOverlay {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = current_theme();
        #[cfg(feature = "perf")]
        let started = std::time::Instant::now();
        let presentation = self.state.presentation(&theme, &self.layout);
        #[cfg(feature = "perf")]
        tracing::debug!(
            panel = self.state.kind().name(),
            rows = presentation.body.rendered_len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Built overlay presentation"
        );

        // Zero-sized placeholder: no footprint, no pointer events
        if presentation.is_hidden() {
            return div().size_0().into_any_element();
        }

        let colors = theme.tokens(presentation.mode).panel_colors();
        let geometry = presentation.geometry;
        let columns = presentation.columns;
        let row_height = self.layout.row_height;

        let header = presentation.header.map(|header| {
            let entity = cx.entity().downgrade();
            HeaderBar::new(header, colors, row_height, self.layout.cell_gap).on_action(Rc::new(
                move |id: &str, _window: &mut Window, cx: &mut App| {
                    if let Some(entity) = entity.upgrade() {
                        entity.update(cx, |this, cx| this.handle_header_action(id, cx));
                    }
                },
            ))
        });

        let body = match presentation.body {
            ListPresentation::Rows(rows) => self.render_rows(rows, columns, cx),
            ListPresentation::Message(message) => {
                MessageCell::new(message, row_height).into_any_element()
            }
        };

        let mut panel = div()
            .id("tag-overlay")
            .key_context("TagOverlay")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key))
            .absolute()
            .left(px(geometry.origin.x))
            .top(px(geometry.origin.y))
            .w(px(geometry.width))
            .h(px(geometry.height))
            .flex()
            .flex_col()
            .overflow_hidden()
            .bg(colors.background)
            .border_1()
            .border_color(colors.border)
            .rounded(px(6.))
            .shadow_lg()
            .text_color(colors.text_primary)
            .occlude();

        if let Some(header) = header {
            panel = panel.child(header);
        }
        panel = panel.child(body);

        // Always on top of the host's content
        deferred(panel).with_priority(1).into_any_element()
    }
}
