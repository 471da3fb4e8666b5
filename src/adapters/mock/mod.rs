//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`StaticInterfaces`] - fixed interface list
//! - [`MockCaptureSource`] - capture source replaying scripted packets

pub mod capture;
pub mod interfaces;

pub use capture::{udp_packet, MockCaptureSource};
pub use interfaces::StaticInterfaces;
