//! Row hover/selection state for one overlay.
//!
//! `hovered` and `selected` are independent: a row can be hovered without
//! being selected and vice versa. Replacing the row list resets both,
//! unconditionally, so a stale index never highlights the wrong tag.

use tracing::debug;

/// Background role a row renders with, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBackground {
    Selected,
    Hovered,
    /// Odd rows by position
    AlternateBase,
    Base,
}

/// What a transition actually changed. Used to emit events only on real
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Hover(Option<usize>),
    Select(Option<usize>),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    hovered: Option<usize>,
    selected: Option<usize>,
    row_count: usize,
}

impl SelectionState {
    pub fn new(row_count: usize) -> Self {
        Self {
            hovered: None,
            selected: None,
            row_count,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.selected.is_none()
    }

    fn in_range(&self, index: usize, transition: &str) -> bool {
        if index < self.row_count {
            return true;
        }
        debug!(
            index,
            row_count = self.row_count,
            transition,
            "Ignoring out-of-range row index"
        );
        false
    }

    pub fn pointer_enter(&mut self, index: usize) -> Option<SelectionChange> {
        if !self.in_range(index, "pointer_enter") || self.hovered == Some(index) {
            return None;
        }
        self.hovered = Some(index);
        Some(SelectionChange::Hover(self.hovered))
    }

    /// Clears the hover only when `index` is the hovered row. Enter/leave
    /// pairs can arrive out of order when the pointer crosses a boundary.
    pub fn pointer_leave(&mut self, index: usize) -> Option<SelectionChange> {
        if self.hovered != Some(index) {
            return None;
        }
        self.hovered = None;
        Some(SelectionChange::Hover(None))
    }

    pub fn select(&mut self, index: usize) -> Option<SelectionChange> {
        if !self.in_range(index, "select") || self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        Some(SelectionChange::Select(self.selected))
    }

    pub fn clear_selection(&mut self) -> Option<SelectionChange> {
        self.selected.take()?;
        Some(SelectionChange::Select(None))
    }

    /// Keyboard navigation down, wrapping past the last row.
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        if self.row_count == 0 {
            return None;
        }
        let next = match self.selected {
            Some(i) if i + 1 < self.row_count => i + 1,
            Some(_) | None => 0,
        };
        self.select(next)
    }

    /// Keyboard navigation up, wrapping past the first row.
    pub fn select_previous(&mut self) -> Option<SelectionChange> {
        if self.row_count == 0 {
            return None;
        }
        let previous = match self.selected {
            Some(i) if i > 0 => i - 1,
            Some(_) | None => self.row_count - 1,
        };
        self.select(previous)
    }

    /// New results invalidate every index, even when the list is unchanged.
    pub fn replace_list(&mut self, row_count: usize) -> SelectionChange {
        self.hovered = None;
        self.selected = None;
        self.row_count = row_count;
        SelectionChange::Reset
    }

    /// selected > hovered > alternating base
    pub fn background_for(&self, index: usize) -> RowBackground {
        if self.selected == Some(index) {
            RowBackground::Selected
        } else if self.hovered == Some(index) {
            RowBackground::Hovered
        } else if index % 2 == 1 {
            RowBackground::AlternateBase
        } else {
            RowBackground::Base
        }
    }
}
