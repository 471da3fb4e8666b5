//! Default keybindings.
//!
//! Three tables, consulted by the registry in order:
//! - `global`: active in every zone
//! - `text_editing`: while the filter field has focus; any other plain
//!   character is inserted into the filter
//! - `navigation`: everywhere else

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use crate::app::{Direction, EditOp, Event, ScrollOp};

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding tables.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Event>,
    pub text_editing: HashMap<KeyCombo, Event>,
    pub navigation: HashMap<KeyCombo, Event>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates the default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            text_editing: HashMap::new(),
            navigation: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_text_editing_bindings();
        config.setup_navigation_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        let global = &mut self.global;
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Event::Exit);
        global.insert(
            KeyCombo::plain(KeyCode::Tab),
            Event::CycleFocus(Direction::Forward),
        );
        // Terminals disagree on whether BackTab carries SHIFT
        global.insert(
            KeyCombo::plain(KeyCode::BackTab),
            Event::CycleFocus(Direction::Backward),
        );
        global.insert(
            KeyCombo::shift(KeyCode::BackTab),
            Event::CycleFocus(Direction::Backward),
        );
        global.insert(
            KeyCombo::plain(KeyCode::PageUp),
            Event::Scroll(ScrollOp::PageUp),
        );
        global.insert(
            KeyCombo::plain(KeyCode::PageDown),
            Event::Scroll(ScrollOp::PageDown),
        );
        global.insert(
            KeyCombo::shift(KeyCode::Up),
            Event::Scroll(ScrollOp::LineUp),
        );
        global.insert(
            KeyCombo::shift(KeyCode::Down),
            Event::Scroll(ScrollOp::LineDown),
        );
    }

    fn setup_text_editing_bindings(&mut self) {
        let text = &mut self.text_editing;
        text.insert(
            KeyCombo::plain(KeyCode::Backspace),
            Event::TextEdit(EditOp::Backspace),
        );
        text.insert(
            KeyCombo::plain(KeyCode::Delete),
            Event::TextEdit(EditOp::Delete),
        );
        text.insert(KeyCombo::plain(KeyCode::Left), Event::TextEdit(EditOp::Left));
        text.insert(
            KeyCombo::plain(KeyCode::Right),
            Event::TextEdit(EditOp::Right),
        );
        text.insert(KeyCombo::plain(KeyCode::Home), Event::TextEdit(EditOp::Home));
        text.insert(KeyCombo::plain(KeyCode::End), Event::TextEdit(EditOp::End));
        text.insert(KeyCombo::plain(KeyCode::Enter), Event::Confirm);
        // Reach the router, which ignores them on the filter field
        text.insert(
            KeyCombo::plain(KeyCode::Up),
            Event::Navigate(Direction::Backward),
        );
        text.insert(
            KeyCombo::plain(KeyCode::Down),
            Event::Navigate(Direction::Forward),
        );
    }

    fn setup_navigation_bindings(&mut self) {
        let nav = &mut self.navigation;
        for code in [KeyCode::Up, KeyCode::Char('k')] {
            nav.insert(KeyCombo::plain(code), Event::Navigate(Direction::Backward));
        }
        for code in [KeyCode::Down, KeyCode::Char('j')] {
            nav.insert(KeyCombo::plain(code), Event::Navigate(Direction::Forward));
        }
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            nav.insert(KeyCombo::plain(code), Event::Confirm);
        }
        nav.insert(KeyCombo::plain(KeyCode::Char('?')), Event::ToggleHelp);
        nav.insert(KeyCombo::plain(KeyCode::Char('q')), Event::Exit);
        nav.insert(KeyCombo::plain(KeyCode::Home), Event::Scroll(ScrollOp::Top));
        nav.insert(KeyCombo::plain(KeyCode::End), Event::Scroll(ScrollOp::Bottom));
    }
}

/// One line of on-screen key help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: &'static str,
    pub description: &'static str,
}

impl HelpEntry {
    const fn new(keys: &'static str, description: &'static str) -> Self {
        Self { keys, description }
    }
}

const HELP_UP: HelpEntry = HelpEntry::new("↑/k", "move up");
const HELP_DOWN: HelpEntry = HelpEntry::new("↓/j", "move down");
const HELP_NEXT: HelpEntry = HelpEntry::new("tab", "next field");
const HELP_CONFIRM: HelpEntry = HelpEntry::new("enter", "select");
const HELP_SCROLL: HelpEntry = HelpEntry::new("shift+↑/↓", "scroll");
const HELP_PAGE: HelpEntry = HelpEntry::new("pgup/pgdn", "page");
const HELP_TOGGLE: HelpEntry = HelpEntry::new("?", "toggle help");
const HELP_QUIT: HelpEntry = HelpEntry::new("q", "quit");

/// Collapsed help: just how to expand it.
pub fn short_help() -> Vec<HelpEntry> {
    vec![HELP_TOGGLE]
}

/// Expanded help, one inner vector per column.
pub fn full_help() -> Vec<Vec<HelpEntry>> {
    vec![
        vec![HELP_UP, HELP_DOWN, HELP_NEXT],
        vec![HELP_CONFIRM, HELP_SCROLL, HELP_PAGE],
        vec![HELP_TOGGLE, HELP_QUIT],
    ]
}
