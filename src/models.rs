//! Data types shared between the session, the capture worker and the UI.

use chrono::{DateTime, Utc};
use std::fmt;
use std::net::IpAddr;

/// A capturable network interface, as reported once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// System name used to open the device (e.g. "eth0").
    pub name: String,
    /// Human-readable description, empty when the platform has none.
    pub description: String,
    /// Addresses bound to the interface.
    pub addresses: Vec<IpAddr>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            addresses: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<IpAddr>) -> Self {
        self.addresses = addresses;
        self
    }

    /// Label shown on the interface row.
    pub fn label(&self) -> String {
        if self.description.is_empty() || self.description == self.name {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.description)
        }
    }
}

/// What the worker is asked to capture. Fixed at start time: editing the
/// filter while recording only affects the next start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub interface: String,
    pub filter: String,
}

impl CaptureRequest {
    pub fn new(interface: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            filter: filter.into(),
        }
    }
}

/// Link-layer framing of captured bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Ethernet,
    /// BSD loopback: 4-byte address family header.
    Null,
    /// Bare IPv4/IPv6 packets.
    RawIp,
    /// Linux "cooked" capture (the `any` device).
    LinuxSll,
    Other(i32),
}

impl LinkKind {
    /// Map a libpcap DLT/LINKTYPE value.
    pub fn from_linktype(value: i32) -> Self {
        match value {
            0 | 108 => LinkKind::Null,
            1 => LinkKind::Ethernet,
            12 | 14 | 101 | 228 | 229 => LinkKind::RawIp,
            113 => LinkKind::LinuxSll,
            other => LinkKind::Other(other),
        }
    }
}

/// Raw packet as handed over by a capture handle.
#[derive(Debug, Clone)]
pub struct CapturedPacket {
    pub timestamp: DateTime<Utc>,
    pub link: LinkKind,
    pub data: Vec<u8>,
    /// Length on the wire; `data` may be shorter when truncated by snaplen.
    pub wire_len: u32,
}

/// One display-ready line of the scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketRecord(String);

impl PacketRecord {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn line(&self) -> &str {
        &self.0
    }

    pub fn into_line(self) -> String {
        self.0
    }
}

impl fmt::Display for PacketRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a capture worker ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// Stopped on request, or because the session went away.
    Stopped,
    /// Open, filter or read failure, with the message to show.
    Failed(String),
}

impl StopOutcome {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            StopOutcome::Stopped => None,
            StopOutcome::Failed(message) => Some(message),
        }
    }
}
