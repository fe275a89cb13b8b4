//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to table actions.
///
/// Vim-style letters plus the usual arrow/Home/End keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `code` with `modifiers` to `action`, replacing any existing binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Application controls
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        // Pagination
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);

        // Row selection
        keys.bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, none, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrev);

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Enter, none, KeyAction::SubmitSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::CancelSearch);

        // Filter & sort
        keys.bind(KeyCode::Char('f'), none, KeyAction::CycleFilter);
        keys.bind(KeyCode::Char('s'), none, KeyAction::CycleSort);
        keys.bind(KeyCode::Char('r'), none, KeyAction::ReverseSort);

        // Record actions
        keys.bind(KeyCode::Char('b'), none, KeyAction::ToggleBlock);
        keys.bind(KeyCode::Char('d'), none, KeyAction::Delete);
        keys.bind(KeyCode::Char('a'), none, KeyAction::ApproveOrder);
        keys.bind(KeyCode::Char('x'), none, KeyAction::RejectOrder);

        keys
    }
}
