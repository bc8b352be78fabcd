//! Keyboard bindings configuration.

use crate::model::{KeyAction, SectionId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
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

        // Line scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);
        keys.bind(KeyCode::Char(' '), none, KeyAction::PageDown);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Navigation bar
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextSection);
        keys.bind(KeyCode::Tab, none, KeyAction::NextSection);
        keys.bind(KeyCode::Char('p'), none, KeyAction::PrevSection);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevSection);
        for (digit, section) in ('1'..='6').zip(SectionId::ALL) {
            keys.bind(KeyCode::Char(digit), none, KeyAction::JumpTo(section));
        }

        // Application controls
        keys.bind(KeyCode::Enter, none, KeyAction::SkipIntro);
        keys.bind(KeyCode::Esc, none, KeyAction::SkipIntro);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_vim_keys_to_scrolling() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::ScrollDown)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::ScrollToBottom),
            "Uppercase 'G' (shift+g) should jump to the bottom"
        );
    }

    #[test]
    fn digits_jump_to_sections_in_navbar_order() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(KeyAction::JumpTo(SectionId::Home))
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE)),
            Some(KeyAction::JumpTo(SectionId::Contact))
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }
}
