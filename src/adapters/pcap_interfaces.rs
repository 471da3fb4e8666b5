//! libpcap-backed interface enumeration.

use pcap::Device;
use tracing::debug;

use crate::error::InterfaceError;
use crate::models::InterfaceDescriptor;
use crate::traits::InterfaceProvider;

/// Lists devices with `pcap::Device::list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PcapInterfaces;

impl PcapInterfaces {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceProvider for PcapInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceDescriptor>, InterfaceError> {
        let devices = Device::list().map_err(|e| InterfaceError::EnumerationFailed {
            message: e.to_string(),
        })?;

        let interfaces: Vec<InterfaceDescriptor> =
            devices.into_iter().map(descriptor_from_device).collect();
        debug!(count = interfaces.len(), "enumerated interfaces");

        if interfaces.is_empty() {
            return Err(InterfaceError::NoInterfaces);
        }
        Ok(interfaces)
    }
}

fn descriptor_from_device(device: Device) -> InterfaceDescriptor {
    let addresses = device.addresses.iter().map(|a| a.addr).collect();
    InterfaceDescriptor::new(device.name)
        .with_description(device.desc.unwrap_or_default())
        .with_addresses(addresses)
}
