//! Shared helpers for integration tests.

#![allow(dead_code)]

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use sniff::app::{Event, Session};
use sniff::input::KeymapRegistry;
use sniff::models::InterfaceDescriptor;
use sniff::ui;

pub fn interfaces(names: &[&str]) -> Vec<InterfaceDescriptor> {
    names.iter().map(|n| InterfaceDescriptor::new(*n)).collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn terminal_key(code: KeyCode) -> std::io::Result<TerminalEvent> {
    Ok(TerminalEvent::Key(key(code)))
}

/// Feed key presses through the default keymap into the session.
pub fn press(session: &mut Session, keys: &[KeyEvent]) -> Vec<sniff::app::Command> {
    let registry = KeymapRegistry::new();
    let mut commands = Vec::new();
    for key in keys {
        if let Some(event) = registry.dispatch(*key, session.focus_zone()) {
            commands.extend(session.transition(event));
        }
    }
    commands
}

pub fn resize(session: &mut Session, width: u16, height: u16) {
    session.transition(Event::Resize { width, height });
}

pub fn draw(session: &Session, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, session)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
