//! Capture worker: owns one capture handle on a blocking thread.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::format::summarize;
use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::models::{CaptureRequest, PacketRecord, StopOutcome};
use crate::terminal::catch_contained;
use crate::traits::CaptureSource;

/// The event loop's side of a running worker.
#[derive(Debug)]
pub struct WorkerHandle {
    stop: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl WorkerHandle {
    /// Signal the worker to stop. Returns false if a stop was already sent.
    pub fn request_stop(&mut self) -> bool {
        match self.stop.take() {
            Some(tx) => {
                // The worker may already be gone; its stop report is still queued.
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    /// Stop the worker and wait for its thread, giving up after `timeout`.
    /// Returns true if the thread finished in time.
    pub async fn shutdown(mut self, timeout: Duration) -> bool {
        self.request_stop();
        match tokio::time::timeout(timeout, self.join).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                error!("Capture worker panicked: {}", e);
                true
            }
            Err(_) => {
                warn!("Capture worker did not stop within {:?}", timeout);
                false
            }
        }
    }
}

/// Start a worker for `request` on the blocking pool.
///
/// Every captured packet is sent on `packets` in capture order. When the
/// worker ends, for any reason including a panic, its handle is closed and
/// exactly one [`StopOutcome`] is sent on `stopped`.
pub fn spawn_worker(
    source: Arc<dyn CaptureSource>,
    request: CaptureRequest,
    config: CaptureConfig,
    packets: UnboundedSender<PacketRecord>,
    stopped: UnboundedSender<StopOutcome>,
) -> WorkerHandle {
    let (stop_tx, stop_rx) = oneshot::channel();

    let join = tokio::task::spawn_blocking(move || {
        let outcome = catch_contained(|| {
            run_worker(source.as_ref(), &request, &config, &packets, stop_rx)
        })
        .unwrap_or_else(|message| {
            let err = CaptureError::Worker { message };
            error!(code = err.error_code(), "Capture worker panicked: {}", err);
            StopOutcome::Failed(err.user_message())
        });
        if stopped.send(outcome).is_err() {
            debug!("Stop report dropped, event loop already gone");
        }
    });

    WorkerHandle {
        stop: Some(stop_tx),
        join,
    }
}

/// The worker body. Blocks until stopped or failed; the capture handle is
/// dropped before this returns.
pub fn run_worker(
    source: &dyn CaptureSource,
    request: &CaptureRequest,
    config: &CaptureConfig,
    packets: &UnboundedSender<PacketRecord>,
    mut stop_rx: oneshot::Receiver<()>,
) -> StopOutcome {
    let mut handle = match source.open(request, config) {
        Ok(handle) => handle,
        Err(e) => {
            warn!(code = e.error_code(), "Capture failed to start: {}", e);
            return StopOutcome::Failed(e.user_message());
        }
    };

    info!(interface = %request.interface, "Capture worker running");
    let mut count: u64 = 0;

    let outcome = loop {
        match stop_rx.try_recv() {
            Ok(()) | Err(TryRecvError::Closed) => break StopOutcome::Stopped,
            Err(TryRecvError::Empty) => {}
        }

        match handle.next_packet() {
            Ok(Some(packet)) => {
                count += 1;
                if packets.send(summarize(&packet)).is_err() {
                    break StopOutcome::Stopped;
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!(code = e.error_code(), "Capture read failed: {}", e);
                break StopOutcome::Failed(e.user_message());
            }
        }
    };

    drop(handle);
    info!(interface = %request.interface, packets = count, ?outcome, "Capture worker finished");
    outcome
}
