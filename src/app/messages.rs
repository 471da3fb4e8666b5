//! Events consumed by the session and commands it emits.

use super::types::{Direction, EditOp, ScrollOp};
use crate::models::{CaptureRequest, PacketRecord, StopOutcome};

/// Everything that can change the session, from the keyboard, the terminal,
/// or the capture worker. Applied one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Move focus up/down (ignored on the filter field)
    Navigate(Direction),
    /// Move focus in any zone (Tab / Shift+Tab)
    CycleFocus(Direction),
    /// Edit the filter (only while it is focused)
    TextEdit(EditOp),
    /// Activate the focused zone
    Confirm,
    /// Collapse or expand the key help
    ToggleHelp,
    /// Move the scrollback viewport
    Scroll(ScrollOp),
    /// A packet line from the worker
    PacketArrived(PacketRecord),
    /// The worker ended
    CaptureStopped(StopOutcome),
    /// Terminal size changed
    Resize { width: u16, height: u16 },
    /// Quit the application
    Exit,
}

/// Side effects requested by a transition, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Spawn a capture worker
    StartCapture(CaptureRequest),
    /// Signal the running worker to stop
    RequestStop,
    /// Accept the next packet message
    ReArmPacketListener,
    /// Accept the next stop report
    ReArmStopListener,
    /// Stop the worker and leave the event loop
    Quit,
}
