//! Session state and the event router.
//!
//! This module contains the core [`Session`] struct and related types:
//! - [`Event`] - input to [`Session::transition`]
//! - [`Command`] - side effects for the runtime to execute
//! - [`FocusZone`] - what the focus index points at
//! - [`CaptureLifecycle`] - Idle, Recording or Stopping
//!
//! The session is the single owner of UI state. It never performs I/O:
//! everything it wants done comes back as a [`Command`], and everything the
//! outside world reports arrives as an [`Event`].

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::{Command, Event};
pub use types::{CaptureLifecycle, Direction, EditOp, FocusZone, ScrollOp, ZoneKind};

use crate::models::{CaptureRequest, InterfaceDescriptor};
use crate::widgets::FilterInput;

/// Rows taken by the scrollback pane's borders.
const SCROLLBACK_CHROME: u16 = 2;

/// Authoritative state of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    interfaces: Vec<InterfaceDescriptor>,
    focus_index: usize,
    selected: Option<usize>,
    filter: FilterInput,
    lifecycle: CaptureLifecycle,
    scrollback: Vec<String>,
    /// Lines scrolled up from the tail; 0 follows new packets
    scroll_offset: usize,
    help_expanded: bool,
    width: u16,
    height: u16,
    error_log: Option<String>,
    active_capture: Option<CaptureRequest>,
    exited: bool,
}

impl Session {
    /// Fresh session over a fixed interface list: focus on the first row,
    /// nothing selected, idle, help expanded.
    pub fn new(interfaces: Vec<InterfaceDescriptor>) -> Self {
        Self {
            interfaces,
            focus_index: 0,
            selected: None,
            filter: FilterInput::new(),
            lifecycle: CaptureLifecycle::Idle,
            scrollback: Vec::new(),
            scroll_offset: 0,
            help_expanded: true,
            width: 0,
            height: 0,
            error_log: None,
            active_capture: None,
            exited: false,
        }
    }

    pub fn interfaces(&self) -> &[InterfaceDescriptor] {
        &self.interfaces
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn focus_zone(&self) -> FocusZone {
        FocusZone::from_index(self.focus_index, self.interfaces.len())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_interface(&self) -> Option<&InterfaceDescriptor> {
        self.selected.and_then(|i| self.interfaces.get(i))
    }

    pub fn filter(&self) -> &FilterInput {
        &self.filter
    }

    pub fn lifecycle(&self) -> CaptureLifecycle {
        self.lifecycle
    }

    pub fn is_recording(&self) -> bool {
        self.lifecycle.is_recording()
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn help_expanded(&self) -> bool {
        self.help_expanded
    }

    /// Last known terminal size as (width, height).
    pub fn geometry(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn error_log(&self) -> Option<&str> {
        self.error_log.as_deref()
    }

    /// Interface and filter of the running capture.
    pub fn active_capture(&self) -> Option<&CaptureRequest> {
        self.active_capture.as_ref()
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Lines visible in the scrollback pane at the current height.
    pub fn page_height(&self) -> usize {
        self.height.saturating_sub(SCROLLBACK_CHROME).max(1) as usize
    }

    /// Largest useful scroll offset: the first line at the top of the pane.
    pub fn max_scroll_offset(&self) -> usize {
        self.scrollback.len().saturating_sub(self.page_height())
    }
}
