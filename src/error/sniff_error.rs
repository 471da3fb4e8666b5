//! Unified error type for Sniff.

use thiserror::Error;

use super::capture::CaptureError;
use super::interface::InterfaceError;

/// Type alias for Results using [`SniffError`].
pub type SniffResult<T> = Result<T, SniffError>;

/// Every error the application can produce.
#[derive(Debug, Error)]
pub enum SniffError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Interface(#[from] InterfaceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration for {variable}: {message}")]
    Config { variable: String, message: String },
}

impl SniffError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SniffError::Capture(err) => err.error_code(),
            SniffError::Interface(err) => err.error_code(),
            SniffError::Io(_) => "IO_ERROR",
            SniffError::Config { .. } => "CONFIG_INVALID",
        }
    }

    /// User-facing message.
    pub fn user_message(&self) -> String {
        match self {
            SniffError::Capture(err) => err.user_message(),
            SniffError::Interface(err) => err.user_message(),
            SniffError::Io(err) => format!("I/O error: {}", err),
            SniffError::Config { variable, message } => {
                format!("Invalid value for {}: {}", variable, message)
            }
        }
    }
}
