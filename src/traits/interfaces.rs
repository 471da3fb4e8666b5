//! Interface enumeration trait abstraction.

use crate::error::InterfaceError;
use crate::models::InterfaceDescriptor;

/// Lists the interfaces offered in the UI. Called once at startup.
pub trait InterfaceProvider {
    /// Enumerate interfaces. An empty list is reported as
    /// [`InterfaceError::NoInterfaces`] rather than `Ok(vec![])`.
    fn interfaces(&self) -> Result<Vec<InterfaceDescriptor>, InterfaceError>;
}
