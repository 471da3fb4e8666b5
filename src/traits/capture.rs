//! Capture source trait abstraction.

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::models::{CaptureRequest, CapturedPacket};

/// An open live capture. Closing happens on drop.
pub trait CaptureHandle: Send {
    /// Block until the next packet or the read timeout.
    ///
    /// # Returns
    /// * `Ok(Some(packet))` - a packet was captured
    /// * `Ok(None)` - the read timed out; the caller gets a chance to check
    ///   for a stop request before reading again
    /// * `Err(_)` - the capture is unusable and the worker should stop
    fn next_packet(&mut self) -> Result<Option<CapturedPacket>, CaptureError>;
}

/// Opens captures. Shared between the event loop and worker threads.
pub trait CaptureSource: Send + Sync + 'static {
    /// Open `request.interface` and apply `request.filter` verbatim.
    ///
    /// An empty (or whitespace-only) filter captures everything.
    fn open(
        &self,
        request: &CaptureRequest,
        config: &CaptureConfig,
    ) -> Result<Box<dyn CaptureHandle>, CaptureError>;
}
