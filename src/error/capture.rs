//! Errors raised while running a capture.

use thiserror::Error;

/// Failures of the capture worker.
///
/// None of these terminate the process: the worker converts them into a stop
/// report and the session returns to idle with the message on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The device could not be opened (missing, down, or insufficient privileges).
    #[error("cannot open interface '{interface}': {message}")]
    OpenFailed { interface: String, message: String },

    /// The filter expression did not compile.
    #[error("invalid filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    /// Reading from an open capture failed.
    #[error("capture read failed: {message}")]
    ReadFailed { message: String },

    /// The worker panicked, usually inside a capture handle.
    #[error("capture worker failed: {message}")]
    Worker { message: String },
}

impl CaptureError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CaptureError::OpenFailed { .. } => "CAPTURE_OPEN_FAILED",
            CaptureError::InvalidFilter { .. } => "CAPTURE_INVALID_FILTER",
            CaptureError::ReadFailed { .. } => "CAPTURE_READ_FAILED",
            CaptureError::Worker { .. } => "CAPTURE_WORKER_FAILED",
        }
    }

    /// Message shown in the error-log region.
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::OpenFailed { interface, message } => {
                let mut msg = format!("Cannot open {}: {}", interface, message);
                if message.to_lowercase().contains("permission") {
                    msg.push_str(" (try running with capture privileges)");
                }
                msg
            }
            CaptureError::InvalidFilter { filter, message } => {
                format!("Invalid filter \"{}\": {}", filter, message)
            }
            CaptureError::ReadFailed { message } => format!("Capture stopped: {}", message),
            CaptureError::Worker { message } => format!("Capture worker failed: {}", message),
        }
    }
}
