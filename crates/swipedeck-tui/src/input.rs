use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    First,
    Last,
    /// Digit keys: jump straight to a card (0-based)
    JumpTo(usize),
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers == KeyModifiers::NONE {
            return Action::JumpTo(c as usize - '1' as usize);
        }
    }

    keymap
        .resolve(KeyBinding::new(key.code, key.modifiers))
        .unwrap_or(Action::None)
}
