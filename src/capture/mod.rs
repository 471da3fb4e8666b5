//! Background packet capture.
//!
//! A capture runs on a blocking thread and never touches session state. It
//! talks to the event loop through three channels:
//!
//! - packets: one [`PacketRecord`](crate::models::PacketRecord) per captured
//!   packet, in capture order
//! - stopped: exactly one [`StopOutcome`](crate::models::StopOutcome) when the
//!   worker ends, sent after the capture handle is closed
//! - stop: a one-shot signal from the loop, checked between reads

pub mod format;
pub mod worker;

pub use format::summarize;
pub use worker::{run_worker, spawn_worker, WorkerHandle};
