//! libpcap-backed capture source.

use chrono::{DateTime, Utc};
use pcap::{Active, Capture, PacketHeader};
use tracing::{debug, info};

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::models::{CaptureRequest, CapturedPacket, LinkKind};
use crate::traits::{CaptureHandle, CaptureSource};

/// Opens live captures with the `pcap` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PcapCaptureSource;

impl PcapCaptureSource {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureSource for PcapCaptureSource {
    fn open(
        &self,
        request: &CaptureRequest,
        config: &CaptureConfig,
    ) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        let open_failed = |e: pcap::Error| CaptureError::OpenFailed {
            interface: request.interface.clone(),
            message: e.to_string(),
        };

        debug!(
            interface = %request.interface,
            snaplen = config.snaplen,
            promisc = config.promiscuous,
            timeout_ms = config.read_timeout_ms,
            "opening capture"
        );

        let mut capture = Capture::from_device(request.interface.as_str())
            .map_err(open_failed)?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.read_timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(open_failed)?;

        let filter = request.filter.trim();
        if !filter.is_empty() {
            capture
                .filter(filter, true)
                .map_err(|e| CaptureError::InvalidFilter {
                    filter: filter.to_string(),
                    message: e.to_string(),
                })?;
        }

        let link = LinkKind::from_linktype(capture.get_datalink().0);
        info!(interface = %request.interface, filter = %filter, ?link, "capture opened");

        Ok(Box::new(PcapHandle { capture, link }))
    }
}

struct PcapHandle {
    capture: Capture<Active>,
    link: LinkKind,
}

impl CaptureHandle for PcapHandle {
    fn next_packet(&mut self) -> Result<Option<CapturedPacket>, CaptureError> {
        match self.capture.next_packet() {
            Ok(packet) => Ok(Some(CapturedPacket {
                timestamp: header_timestamp(packet.header),
                link: self.link,
                data: packet.data.to_vec(),
                wire_len: packet.header.len,
            })),
            Err(pcap::Error::TimeoutExpired) => Ok(None),
            Err(e) => Err(CaptureError::ReadFailed {
                message: e.to_string(),
            }),
        }
    }
}

fn header_timestamp(header: &PacketHeader) -> DateTime<Utc> {
    let secs = header.ts.tv_sec as i64;
    let nanos = (header.ts.tv_usec as u32).saturating_mul(1000);
    DateTime::from_timestamp(secs, nanos).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_interface_is_recoverable_error() {
        let source = PcapCaptureSource::new();
        let request = CaptureRequest::new("nonexistent_interface_xyz", "");
        match source.open(&request, &CaptureConfig::default()) {
            Err(CaptureError::OpenFailed { interface, .. }) => {
                assert_eq!(interface, "nonexistent_interface_xyz");
            }
            Err(other) => panic!("Expected OpenFailed, got {:?}", other),
            Ok(_) => panic!("Opening a nonexistent interface should fail"),
        }
    }
}
