//! The event loop.
//!
//! [`Runtime`] owns the [`Session`] and everything with a lifetime: the two
//! worker channels, their re-arm flags and the running worker. It merges
//! terminal input and worker messages into one ordered stream of events,
//! applies each to the session, executes the resulting commands and redraws.
//!
//! # Listeners
//!
//! Each worker channel has one listener, armed by a flag. Receiving a message
//! disarms it; only the session's `ReArm*` command arms it again, so there is
//! never more than one outstanding wait per channel. A received stop report
//! is held back until the packet channel is empty and the packet listener is
//! armed, so every packet a worker sent before it finished is applied before
//! the session returns to idle.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::Event as TerminalEvent;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::app::{Command, Event, Session};
use crate::capture::{spawn_worker, WorkerHandle};
use crate::config::CaptureConfig;
use crate::error::SniffResult;
use crate::input::KeymapRegistry;
use crate::models::{PacketRecord, StopOutcome};
use crate::traits::CaptureSource;

/// Extra time, on top of one read timeout, a worker gets to stop at exit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// What woke the loop.
enum Wake {
    Input(Option<io::Result<TerminalEvent>>),
    Worker(Event),
}

pub struct Runtime {
    session: Session,
    source: Arc<dyn CaptureSource>,
    config: CaptureConfig,
    keymap: KeymapRegistry,
    packet_tx: UnboundedSender<PacketRecord>,
    packet_rx: UnboundedReceiver<PacketRecord>,
    stopped_tx: UnboundedSender<StopOutcome>,
    stopped_rx: UnboundedReceiver<StopOutcome>,
    packet_armed: bool,
    stop_armed: bool,
    held_stop: Option<StopOutcome>,
    worker: Option<WorkerHandle>,
    quit: bool,
}

impl Runtime {
    pub fn new(session: Session, source: Arc<dyn CaptureSource>, config: CaptureConfig) -> Self {
        let (packet_tx, packet_rx) = mpsc::unbounded_channel();
        let (stopped_tx, stopped_rx) = mpsc::unbounded_channel();
        Self {
            session,
            source,
            config,
            keymap: KeymapRegistry::new(),
            packet_tx,
            packet_rx,
            stopped_tx,
            stopped_rx,
            packet_armed: true,
            stop_armed: true,
            held_stop: None,
            worker: None,
            quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True once `Quit` has been executed.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// True while a worker has been started and has not reported back.
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Apply one event to the session and execute the commands it produces.
    pub fn dispatch(&mut self, event: Event) {
        for command in self.session.transition(event) {
            self.execute(command);
        }
    }

    /// Translate terminal input into a session event, if it means anything.
    pub fn translate(&self, input: TerminalEvent) -> Option<Event> {
        match input {
            TerminalEvent::Key(key) => self.keymap.dispatch(key, self.session.focus_zone()),
            TerminalEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::StartCapture(request) => {
                if self.worker.is_some() {
                    // The session only starts from idle, after the previous
                    // worker reported back.
                    warn!("Start requested while a worker is still registered");
                }
                info!(interface = %request.interface, "Spawning capture worker");
                self.worker = Some(spawn_worker(
                    Arc::clone(&self.source),
                    request,
                    self.config.clone(),
                    self.packet_tx.clone(),
                    self.stopped_tx.clone(),
                ));
            }
            Command::RequestStop => match self.worker.as_mut() {
                Some(worker) => {
                    if !worker.request_stop() {
                        debug!("Stop already sent");
                    }
                }
                None => warn!("Stop requested with no worker"),
            },
            Command::ReArmPacketListener => self.packet_armed = true,
            Command::ReArmStopListener => self.stop_armed = true,
            Command::Quit => self.quit = true,
        }
    }

    /// Wait for the next message from a worker on an armed listener and
    /// disarm that listener. Pends forever while neither is armed.
    pub async fn next_message(&mut self) -> Event {
        loop {
            if let Some(outcome) = self.held_stop.take() {
                if let Some(event) = self.release_stop(outcome) {
                    return event;
                }
            }

            tokio::select! {
                biased;
                Some(record) = self.packet_rx.recv(), if self.packet_armed => {
                    self.packet_armed = false;
                    return Event::PacketArrived(record);
                }
                Some(outcome) = self.stopped_rx.recv(), if self.stop_armed && self.held_stop.is_none() => {
                    self.held_stop = Some(outcome);
                }
                else => std::future::pending::<()>().await,
            }
        }
    }

    /// Deliver a held stop report, or a packet queued behind it. Keeps the
    /// report held while a packet could still be pending.
    fn release_stop(&mut self, outcome: StopOutcome) -> Option<Event> {
        if !self.packet_armed {
            self.held_stop = Some(outcome);
            return None;
        }
        // The packet can land after its branch was polled in the same pass
        if let Ok(record) = self.packet_rx.try_recv() {
            self.held_stop = Some(outcome);
            self.packet_armed = false;
            return Some(Event::PacketArrived(record));
        }
        if !self.stop_armed {
            self.held_stop = Some(outcome);
            return None;
        }
        self.stop_armed = false;
        // The worker sends its report as the last thing it does
        self.worker = None;
        Some(Event::CaptureStopped(outcome))
    }

    /// Run until the session quits or input ends.
    ///
    /// `draw` is called with the session after every applied event (and once
    /// up front). The worker, if any, is stopped before this returns.
    pub async fn run<S, D>(&mut self, mut input: S, mut draw: D) -> SniffResult<()>
    where
        S: Stream<Item = io::Result<TerminalEvent>> + Unpin,
        D: FnMut(&Session) -> SniffResult<()>,
    {
        let result = loop {
            if let Err(e) = draw(&self.session) {
                break Err(e);
            }
            if self.quit {
                break Ok(());
            }

            let wake = tokio::select! {
                biased;
                maybe = input.next() => Wake::Input(maybe),
                event = self.next_message() => Wake::Worker(event),
            };

            match wake {
                Wake::Input(Some(Ok(input_event))) => {
                    if let Some(event) = self.translate(input_event) {
                        self.dispatch(event);
                    }
                }
                Wake::Input(Some(Err(e))) => {
                    error!("Terminal input failed: {}", e);
                    break Err(e.into());
                }
                Wake::Input(None) => {
                    info!("Input stream ended");
                    self.dispatch(Event::Exit);
                }
                Wake::Worker(event) => self.dispatch(event),
            }
        };

        self.shutdown().await;
        result
    }

    /// Stop and join the worker, if one is running.
    pub async fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let read_timeout = Duration::from_millis(self.config.read_timeout_ms.max(0) as u64);
        if worker.shutdown(read_timeout + SHUTDOWN_GRACE).await {
            info!("Capture worker stopped");
        }
    }
}
