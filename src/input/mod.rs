//! Keyboard input translation.
//!
//! Key presses never touch the session directly. They are translated into
//! session [`Event`](crate::app::Event)s by the [`KeymapRegistry`], taking the
//! focused zone into account:
//!
//! ```text
//! KeyEvent -> KeymapRegistry::dispatch(key, zone) -> Event -> Session::transition
//! ```
//!
//! # Modules
//!
//! - [`keybindings`] - default key combos and the help entries shown on screen
//! - [`registry`] - [`KeymapRegistry`] for mapping keys to events

pub mod keybindings;
pub mod registry;

pub use keybindings::{full_help, short_help, HelpEntry, KeyCombo, KeybindingConfig};
pub use registry::KeymapRegistry;
