//! Color theme constants.
//!
//! Minimal dark palette used throughout the UI.

use ratatui::style::Color;

/// Borders of unfocused blocks
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Regular text
pub const COLOR_ACCENT: Color = Color::White;

/// Logo and titles
pub const COLOR_HEADER: Color = Color::White;

/// Focused zone
pub const COLOR_FOCUS: Color = Color::Cyan;

/// Text cursor block in the filter field
pub const COLOR_CURSOR: Color = Color::Magenta;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Recording status and the selected interface mark
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Stop requested, waiting for the worker
pub const COLOR_STOPPING: Color = Color::Yellow;

/// Error log line
pub const COLOR_ERROR: Color = Color::Red;
