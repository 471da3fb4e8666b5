//! Errors raised while enumerating network interfaces.

use thiserror::Error;

/// Startup enumeration failures. The UI has nothing to show without
/// interfaces, so these end the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterfaceError {
    /// The capture library failed to list devices.
    #[error("failed to enumerate network interfaces: {message}")]
    EnumerationFailed { message: String },

    /// Enumeration worked but returned nothing.
    #[error("no network interfaces found")]
    NoInterfaces,
}

impl InterfaceError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            InterfaceError::EnumerationFailed { .. } => "IFACE_ENUMERATION_FAILED",
            InterfaceError::NoInterfaces => "IFACE_NONE",
        }
    }

    /// Message printed on stderr.
    pub fn user_message(&self) -> String {
        match self {
            InterfaceError::EnumerationFailed { message } => {
                format!("Could not list network interfaces: {}", message)
            }
            InterfaceError::NoInterfaces => {
                "No network interfaces found. Are you running with sufficient privileges?"
                    .to_string()
            }
        }
    }
}
