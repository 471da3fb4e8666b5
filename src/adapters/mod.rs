//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`PcapInterfaces`] - interface enumeration through libpcap
//! - [`PcapCaptureSource`] - live capture and BPF filtering through libpcap
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::StaticInterfaces`] - fixed interface list, or a fixed failure
//! - [`mock::MockCaptureSource`] - scripted packets and injectable errors

pub mod mock;
pub mod pcap_capture;
pub mod pcap_interfaces;

pub use mock::{MockCaptureSource, StaticInterfaces};
pub use pcap_capture::PcapCaptureSource;
pub use pcap_interfaces::PcapInterfaces;
