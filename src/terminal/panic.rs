//! Panic hook for terminal restoration, and containment of panics in capture
//! workers.
//!
//! A panic on the UI thread ends the session: the hook leaves TUI mode before
//! the report is printed. A panic inside [`catch_contained`] is turned into an
//! error value instead, so the hook only logs it and leaves the screen alone.

use super::setup::emergency_restore;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

thread_local! {
    /// Set while the current thread runs inside `catch_contained`.
    static CONTAINED: Cell<bool> = const { Cell::new(false) };
}

/// Install a panic hook that restores the terminal, then defers to the
/// previously installed hook to print the report.
///
/// Call after `color_eyre::install()` and before creating the
/// `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if CONTAINED.with(Cell::get) {
            error!("Contained panic: {}", panic_info);
            return;
        }
        emergency_restore();
        original_hook(panic_info);
    }));
}

/// Run `f`, returning the panic message as `Err` if it panics.
pub fn catch_contained<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let previous = CONTAINED.with(|c| c.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    CONTAINED.with(|c| c.set(previous));
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
