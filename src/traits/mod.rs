//! Trait abstractions for the external collaborators.
//!
//! The session controller never talks to libpcap directly. These traits are
//! the seams where production adapters (`crate::adapters`) and test doubles
//! (`crate::adapters::mock`) plug in.
//!
//! # Traits
//!
//! - [`InterfaceProvider`] - one-shot interface enumeration at startup
//! - [`CaptureSource`] - opens a live capture for an interface and filter
//! - [`CaptureHandle`] - blocking, timeout-bounded packet reads

pub mod capture;
pub mod interfaces;

pub use capture::{CaptureHandle, CaptureSource};
pub use interfaces::InterfaceProvider;
