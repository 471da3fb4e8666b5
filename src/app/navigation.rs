//! Focus, selection and scrolling.

use super::types::{Direction, FocusZone, ScrollOp};
use super::Session;

impl Session {
    /// Move focus one step, wrapping at both ends.
    pub(super) fn move_focus(&mut self, direction: Direction) {
        let count = FocusZone::count(self.interfaces.len());
        self.focus_index = match direction {
            Direction::Forward => (self.focus_index + 1) % count,
            Direction::Backward => (self.focus_index + count - 1) % count,
        };
    }

    /// Toggle `row` between selected and unselected. Selecting replaces any
    /// previous selection.
    pub(super) fn toggle_selection(&mut self, row: usize) {
        self.selected = if self.selected == Some(row) {
            None
        } else {
            Some(row)
        };
    }

    pub(super) fn scroll(&mut self, op: ScrollOp) {
        let page = self.page_height();
        let offset = match op {
            ScrollOp::LineUp => self.scroll_offset.saturating_add(1),
            ScrollOp::LineDown => self.scroll_offset.saturating_sub(1),
            ScrollOp::PageUp => self.scroll_offset.saturating_add(page),
            ScrollOp::PageDown => self.scroll_offset.saturating_sub(page),
            ScrollOp::Top => usize::MAX,
            ScrollOp::Bottom => 0,
        };
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// Keep the offset inside the scrollback after it or the pane changed size.
    pub(super) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }
}
