//! Toolkit-independent state behind one overlay widget.
//!
//! [`OverlayState`] holds exactly what persists between renders (the row
//! list, status, header, selection and visibility) and turns input
//! transitions into [`OverlayEvent`]s for the host. The gpui view in
//! `components::overlay` is a thin shell around it.

use crate::layout::LayoutConfig;
use crate::logging;
use crate::model::{
    Anchor, HeaderViewModel, ListStatus, PanelKind, PanelVisibility, RowViewModel,
};
use crate::presentation::{PanelInput, PanelPresentation};
use crate::selection::{SelectionChange, SelectionState};
use crate::theme::{TagTheme, ThemeMode};

/// Events reported to the host. The overlay never mutates host state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Row chosen by click or confirmed keyboard selection
    SelectionConfirmed { index: usize, name: String },
    /// Hover moved; `None` when the pointer left the rows
    HoverChanged { index: Option<usize> },
    /// Header control activated
    HeaderAction { id: String },
    /// Escape pressed while the overlay had focus
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct OverlayState {
    kind: PanelKind,
    rows: Vec<RowViewModel>,
    status: ListStatus,
    header: Option<HeaderViewModel>,
    selection: SelectionState,
    visibility: PanelVisibility,
    mode: ThemeMode,
}

impl OverlayState {
    pub fn new(kind: PanelKind, mode: ThemeMode) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            status: ListStatus::Ready,
            header: None,
            selection: SelectionState::default(),
            visibility: PanelVisibility::hidden(),
            mode,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn header(&self) -> Option<&HeaderViewModel> {
        self.header.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.visible
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Replace the row list. Hover and selection always reset.
    pub fn set_rows(&mut self, rows: Vec<RowViewModel>) -> Option<OverlayEvent> {
        let previous_len = self.rows.len();
        self.rows = rows;
        self.status = ListStatus::Ready;
        logging::log_list_replaced(self.kind.name(), previous_len, self.rows.len(), false);
        self.reset_selection()
    }

    /// Show the host's failure in place of rows
    pub fn set_failed(&mut self, reason: impl Into<String>) -> Option<OverlayEvent> {
        let previous_len = self.rows.len();
        self.rows.clear();
        self.status = ListStatus::Failed(reason.into());
        logging::log_list_replaced(self.kind.name(), previous_len, 0, true);
        self.reset_selection()
    }

    fn reset_selection(&mut self) -> Option<OverlayEvent> {
        let had_hover = self.selection.hovered().is_some();
        self.selection.replace_list(self.rows.len());
        had_hover.then_some(OverlayEvent::HoverChanged { index: None })
    }

    pub fn set_header(&mut self, header: Option<HeaderViewModel>) {
        self.header = header;
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn show_at(&mut self, anchor: Anchor) {
        self.visibility = PanelVisibility::shown_at(anchor);
        logging::log_visibility(self.kind.name(), true, anchor.x, anchor.y);
    }

    /// Hide the panel. A hidden panel has no hovered row.
    pub fn hide(&mut self) -> Option<OverlayEvent> {
        let anchor = self.visibility.anchor;
        self.visibility.visible = false;
        logging::log_visibility(self.kind.name(), false, anchor.x, anchor.y);
        let hovered = self.selection.hovered()?;
        self.selection.pointer_leave(hovered);
        Some(OverlayEvent::HoverChanged { index: None })
    }

    /// Pointer enter/leave on row `index`. Ignored while hidden.
    pub fn hover(&mut self, index: usize, entered: bool) -> Option<OverlayEvent> {
        if !self.is_visible() {
            return None;
        }
        let change = if entered {
            self.selection.pointer_enter(index)
        } else {
            self.selection.pointer_leave(index)
        };
        match change? {
            SelectionChange::Hover(index) => Some(OverlayEvent::HoverChanged { index }),
            _ => None,
        }
    }

    /// Click on row `index`: selects and confirms it. Ignored while hidden.
    pub fn click(&mut self, index: usize) -> Option<OverlayEvent> {
        if !self.is_visible() {
            return None;
        }
        self.selection.select(index);
        if self.selection.selected() != Some(index) {
            return None;
        }
        self.confirm_selected()
    }

    pub fn select_next(&mut self) -> Option<usize> {
        self.selection.select_next()?;
        logging::log_selection(self.kind.name(), self.selection.selected(), false);
        self.selection.selected()
    }

    pub fn select_previous(&mut self) -> Option<usize> {
        self.selection.select_previous()?;
        logging::log_selection(self.kind.name(), self.selection.selected(), false);
        self.selection.selected()
    }

    /// Report the selected row to the host, if any
    pub fn confirm_selected(&self) -> Option<OverlayEvent> {
        let index = self.selection.selected()?;
        let row = self.rows.get(index)?;
        logging::log_selection(self.kind.name(), Some(index), true);
        Some(OverlayEvent::SelectionConfirmed {
            index,
            name: row.name.clone(),
        })
    }

    /// Header controls only exist on a visible related-tags panel
    pub fn header_action(&self, id: &str) -> Option<OverlayEvent> {
        if !self.is_visible() || !self.kind.has_header() {
            return None;
        }
        let header = self.header.as_ref()?;
        header
            .actions
            .iter()
            .any(|action| action.id == id)
            .then(|| OverlayEvent::HeaderAction { id: id.to_string() })
    }

    pub fn presentation(&self, theme: &TagTheme, layout: &LayoutConfig) -> PanelPresentation {
        PanelPresentation::build(PanelInput {
            kind: self.kind,
            rows: &self.rows,
            status: &self.status,
            header: self.header.as_ref(),
            selection: &self.selection,
            visibility: self.visibility,
            mode: self.mode,
            theme,
            layout,
        })
    }
}
