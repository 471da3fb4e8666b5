//! Scripted capture source for testing.
//!
//! Each `open` replays the configured packets in order, then behaves like an
//! idle link: every read sleeps briefly and reports a timeout. A read error
//! can be injected after the script, and opening can be made to fail.

use chrono::Utc;
use etherparse::PacketBuilder;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::models::{CaptureRequest, CapturedPacket, LinkKind};
use crate::traits::{CaptureHandle, CaptureSource};

#[derive(Debug, Default)]
struct MockState {
    packets: Vec<CapturedPacket>,
    open_error: Option<CaptureError>,
    read_error: Option<CaptureError>,
    opened: Vec<CaptureRequest>,
    closed: usize,
}

/// Capture source replaying scripted packets.
#[derive(Debug, Clone)]
pub struct MockCaptureSource {
    state: Arc<Mutex<MockState>>,
    idle_delay: Duration,
}

impl Default for MockCaptureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCaptureSource {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            idle_delay: Duration::from_millis(5),
        }
    }

    /// Packets delivered, in order, by every handle this source opens.
    pub fn with_packets(self, packets: Vec<CapturedPacket>) -> Self {
        self.state.lock().unwrap().packets = packets;
        self
    }

    /// Make `open` fail.
    pub fn with_open_error(self, error: CaptureError) -> Self {
        self.state.lock().unwrap().open_error = Some(error);
        self
    }

    /// Fail the first read after the scripted packets are exhausted.
    pub fn with_read_error(self, error: CaptureError) -> Self {
        self.state.lock().unwrap().read_error = Some(error);
        self
    }

    /// Requests passed to `open`, including failed ones.
    pub fn opened(&self) -> Vec<CaptureRequest> {
        self.state.lock().unwrap().opened.clone()
    }

    /// Number of handles dropped so far.
    pub fn closed_count(&self) -> usize {
        self.state.lock().unwrap().closed
    }
}

impl CaptureSource for MockCaptureSource {
    fn open(
        &self,
        request: &CaptureRequest,
        _config: &CaptureConfig,
    ) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        let mut state = self.state.lock().unwrap();
        state.opened.push(request.clone());
        if let Some(err) = state.open_error.clone() {
            return Err(err);
        }
        Ok(Box::new(MockHandle {
            pending: state.packets.clone().into_iter().rev().collect(),
            read_error: state.read_error.clone(),
            state: Arc::clone(&self.state),
            idle_delay: self.idle_delay,
        }))
    }
}

struct MockHandle {
    /// Remaining packets, last one first so `pop` yields capture order.
    pending: Vec<CapturedPacket>,
    read_error: Option<CaptureError>,
    state: Arc<Mutex<MockState>>,
    idle_delay: Duration,
}

impl CaptureHandle for MockHandle {
    fn next_packet(&mut self) -> Result<Option<CapturedPacket>, CaptureError> {
        if let Some(packet) = self.pending.pop() {
            return Ok(Some(packet));
        }
        if let Some(err) = self.read_error.take() {
            return Err(err);
        }
        std::thread::sleep(self.idle_delay);
        Ok(None)
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.closed += 1;
        }
    }
}

/// Ethernet/IPv4/UDP frame from 10.0.0.1 to 10.0.0.2 with an empty payload.
pub fn udp_packet(src_port: u16, dst_port: u16) -> CapturedPacket {
    let builder = PacketBuilder::ethernet2([2, 0, 0, 0, 0, 1], [2, 0, 0, 0, 0, 2])
        .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64)
        .udp(src_port, dst_port);
    let mut data = Vec::with_capacity(builder.size(0));
    builder
        .write(&mut data, &[])
        .expect("writing into a Vec cannot fail");

    CapturedPacket {
        timestamp: Utc::now(),
        link: LinkKind::Ethernet,
        wire_len: data.len() as u32,
        data,
    }
}
