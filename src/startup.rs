//! Pre-UI startup steps, taken out of `main` so they can run against mocks.

use tracing::{error, info};

use crate::error::InterfaceError;
use crate::models::InterfaceDescriptor;
use crate::traits::InterfaceProvider;

/// Enumerate the interfaces offered in the UI.
///
/// Any error here is fatal: the caller prints `user_message()` to stderr and
/// exits nonzero before the terminal is touched. An empty list is an error
/// even when the provider returns it as `Ok`.
pub fn load_interfaces(
    provider: &dyn InterfaceProvider,
) -> Result<Vec<InterfaceDescriptor>, InterfaceError> {
    let interfaces = provider
        .interfaces()
        .and_then(|list| {
            if list.is_empty() {
                Err(InterfaceError::NoInterfaces)
            } else {
                Ok(list)
            }
        })
        .map_err(|e| {
            error!(code = e.error_code(), "{}", e);
            e
        })?;

    info!(count = interfaces.len(), "Interfaces enumerated");
    Ok(interfaces)
}
