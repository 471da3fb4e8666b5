//! Registry for dispatching keyboard input to session events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::{EditOp, Event, FocusZone, ZoneKind};

/// Maps key events to session events for the focused zone.
///
/// Priority:
/// 1. Global bindings (Ctrl+C, Tab, scrolling)
/// 2. Text editing bindings, then plain characters, while the filter has focus
/// 3. Navigation bindings everywhere else
#[derive(Debug, Clone, Default)]
pub struct KeymapRegistry {
    config: KeybindingConfig,
}

impl KeymapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a key event, or `None` if the key means nothing here.
    pub fn dispatch(&self, key: KeyEvent, zone: FocusZone) -> Option<Event> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let combo = normalize(key);
        if let Some(event) = self.config.global.get(&combo) {
            return Some(event.clone());
        }

        if zone.kind() == ZoneKind::TextEditable {
            if let Some(event) = self.config.text_editing.get(&combo) {
                return Some(event.clone());
            }
            return match combo.code {
                KeyCode::Char(c) if combo.modifiers.is_empty() => {
                    Some(Event::TextEdit(EditOp::Insert(c)))
                }
                _ => None,
            };
        }

        self.config.navigation.get(&combo).cloned()
    }
}

/// Drop SHIFT from printable characters: the shifted glyph is already in the
/// key code ('?' arrives as Shift+'?' on most terminals).
fn normalize(key: KeyEvent) -> KeyCombo {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyCombo::new(key.code, modifiers)
}
