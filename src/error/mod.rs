//! Error handling for Sniff.
//!
//! - **Domain errors**: [`CaptureError`] for anything that happens after an
//!   interface has been chosen, [`InterfaceError`] for startup enumeration
//! - **Unified error type**: [`SniffError`] consolidates both
//! - **Result alias**: [`SniffResult<T>`]
//!
//! Capture errors are recoverable: the worker reports them back to the event
//! loop and they end up in the error-log region of the UI. Interface errors
//! are fatal and reported on stderr before the UI starts.
//!
//! | Type | Raised by | Fatal |
//! |------|-----------|-------|
//! | `InterfaceError` | interface enumeration | Yes |
//! | `CaptureError` | opening a device, compiling a filter, reading | No |
//! | `SniffError::Io` | terminal setup, log file | Yes |

mod capture;
mod interface;
mod sniff_error;

pub use capture::CaptureError;
pub use interface::InterfaceError;
pub use sniff_error::{SniffError, SniffResult};
