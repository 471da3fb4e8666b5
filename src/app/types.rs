//! Type definitions for the session state.
//!
//! - [`FocusZone`] - what the focus index points at
//! - [`ZoneKind`] - what a zone can do
//! - [`CaptureLifecycle`] - recording state
//! - [`Direction`], [`ScrollOp`], [`EditOp`] - event payloads

/// Direction of a focus move. `Backward` is up / Shift+Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Capability of a focus zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    /// An interface row: Confirm toggles selection
    SelectableRow,
    /// The filter field: receives text edits
    TextEditable,
    /// A button: Confirm performs its action
    Actionable,
}

/// Focusable region of the left panel.
///
/// With N interfaces the focus index runs over `0..N+3`: rows first, then
/// the filter field, the start/stop control and the clear control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusZone {
    Interface(usize),
    Filter,
    StartStop,
    Clear,
}

impl FocusZone {
    /// Number of focus positions for `interface_count` interfaces.
    pub fn count(interface_count: usize) -> usize {
        interface_count + 3
    }

    pub fn from_index(index: usize, interface_count: usize) -> Self {
        match index.checked_sub(interface_count) {
            None => FocusZone::Interface(index),
            Some(0) => FocusZone::Filter,
            Some(1) => FocusZone::StartStop,
            Some(_) => FocusZone::Clear,
        }
    }

    pub fn to_index(self, interface_count: usize) -> usize {
        match self {
            FocusZone::Interface(row) => row,
            FocusZone::Filter => interface_count,
            FocusZone::StartStop => interface_count + 1,
            FocusZone::Clear => interface_count + 2,
        }
    }

    pub fn kind(self) -> ZoneKind {
        match self {
            FocusZone::Interface(_) => ZoneKind::SelectableRow,
            FocusZone::Filter => ZoneKind::TextEditable,
            FocusZone::StartStop | FocusZone::Clear => ZoneKind::Actionable,
        }
    }
}

/// Recording lifecycle: Idle -> Recording -> Stopping -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureLifecycle {
    #[default]
    Idle,
    Recording,
    /// Stop requested, waiting for the worker to report back
    Stopping,
}

impl CaptureLifecycle {
    /// True while a worker may be running.
    pub fn is_recording(self) -> bool {
        !matches!(self, CaptureLifecycle::Idle)
    }

    /// Status word for the header.
    pub fn label(self) -> &'static str {
        match self {
            CaptureLifecycle::Idle => "STOPPED",
            CaptureLifecycle::Recording => "RECORDING",
            CaptureLifecycle::Stopping => "STOPPING",
        }
    }
}

/// Scrollback viewport movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollOp {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Filter editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}
