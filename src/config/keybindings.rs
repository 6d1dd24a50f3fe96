//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Vim-style letters and arrow/paging keys both drive the browser.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup, so release/repeat
    /// events from enhanced keyboards resolve like presses.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;

        // Cursor movement
        keys.bind(KeyCode::Char('j'), none, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::MoveUp);
        keys.bind(KeyCode::Down, none, KeyAction::MoveDown);
        keys.bind(KeyCode::Up, none, KeyAction::MoveUp);

        // Paging
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('G'), shift, KeyAction::LastPage);
        keys.bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        keys.bind(KeyCode::Char('z'), none, KeyAction::CyclePageSize);

        // Sorting
        keys.bind(KeyCode::Char('s'), none, KeyAction::CycleSortKey);
        keys.bind(KeyCode::Char('o'), none, KeyAction::ToggleSortOrder);

        // Filtering
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleFilter);
        keys.bind(KeyCode::Char('c'), none, KeyAction::ClearFilters);

        // Focus and selection
        keys.bind(KeyCode::Tab, none, KeyAction::CycleFocus);
        keys.bind(KeyCode::Enter, none, KeyAction::Select);
        keys.bind(KeyCode::Esc, none, KeyAction::Close);

        // Application controls
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), shift, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);

        keys
    }
}
