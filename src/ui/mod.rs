//! UI rendering.
//!
//! [`render`] is a pure projection of a [`Session`] onto a frame: it reads
//! the session and nothing else, so drawing the same session twice produces
//! the same buffer.
//!
//! ```text
//! +-- left panel ---------+-- SNIFF - RECORDING | eth0 ------------+
//! | //SNIFF//             | 12:00:01.000001 TCP 10.0.0.1:443 > ... |
//! | > [x] eth0            | ...                                    |
//! |        - 10.0.0.1     |                                        |
//! |   [ ] lo              |                                        |
//! | +Filter-------------+ |                                        |
//! | |tcp and port 80    | |                                        |
//! | +-------------------+ |                                        |
//! | [ Stop ]  [ Clear ]   |                                        |
//! | error line            |                                        |
//! | help                  |                                   100% |
//! +-----------------------+----------------------------------------+
//! ```

mod help;
mod panels;
mod scrollback;
pub mod theme;

pub use scrollback::scroll_window;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::Session;
use panels::render_left_panel;
use scrollback::render_scrollback;

/// Share of the width given to the control panel.
const LEFT_PANEL_PERCENT: u16 = 35;

/// Draw the whole UI for `session`.
pub fn render(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LEFT_PANEL_PERCENT),
            Constraint::Percentage(100 - LEFT_PANEL_PERCENT),
        ])
        .split(frame.area());

    render_left_panel(frame, chunks[0], session);
    render_scrollback(frame, chunks[1], session);
}
