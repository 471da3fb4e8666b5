//! Fixed interface list for testing.

use crate::error::InterfaceError;
use crate::models::InterfaceDescriptor;
use crate::traits::InterfaceProvider;

/// Returns the interfaces (or error) it was built with.
#[derive(Debug, Clone)]
pub struct StaticInterfaces {
    result: Result<Vec<InterfaceDescriptor>, InterfaceError>,
}

impl StaticInterfaces {
    /// Interfaces named after `names`, without descriptions or addresses.
    pub fn named(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| InterfaceDescriptor::new(*n)).collect())
    }

    pub fn new(interfaces: Vec<InterfaceDescriptor>) -> Self {
        Self {
            result: Ok(interfaces),
        }
    }

    pub fn failing(error: InterfaceError) -> Self {
        Self { result: Err(error) }
    }
}

impl InterfaceProvider for StaticInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceDescriptor>, InterfaceError> {
        match &self.result {
            Ok(list) if list.is_empty() => Err(InterfaceError::NoInterfaces),
            other => other.clone(),
        }
    }
}
