//! Terminal management with RAII cleanup.
//!
//! The `TerminalManager` puts the terminal in raw mode on the alternate
//! screen and restores it when dropped, whether the session ends normally
//! or by error. A panic hook ([`setup_panic_hook`]) covers unwinding paths
//! where the drop might not run in time.
//!
//! # Example
//!
//! ```no_run
//! use sniff::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> sniff::error::SniffResult<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::{catch_contained, setup_panic_hook};
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

use crate::error::SniffResult;

/// Restores the terminal on drop. Created by `TerminalManager`.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Subsequent calls (and the drop) are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen, hide the cursor and
    /// clear.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails. Anything already changed
    /// is restored before returning.
    pub fn new() -> SniffResult<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes whatever succeeded
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> SniffResult<Size> {
        Ok(self.terminal.size()?)
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) {
        self.guard.cleanup();
    }
}
