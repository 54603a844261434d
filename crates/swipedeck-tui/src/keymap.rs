use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use swipedeck_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            let Some(binding) = parse_key_binding(key_str) else {
                warn!("Invalid key binding: '{}', ignoring {:?}", key_str, action);
                return;
            };
            if let Some(existing) = bindings.get(&binding) {
                warn!(
                    "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                    key_str, existing, action
                );
            } else {
                bindings.insert(binding, action);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.previous, Action::Previous);
        add_binding(&config.next, Action::Next);
        add_binding(&config.first, Action::First);
        add_binding(&config.last, Action::Last);
        add_binding(&config.help, Action::ToggleHelp);

        // Not configurable: Ctrl+C, the arrow/Home/End keys and Esc
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Left), Action::Previous);
        bindings.insert(KeyBinding::simple(KeyCode::Right), Action::Next);
        bindings.insert(KeyBinding::simple(KeyCode::Home), Action::First);
        bindings.insert(KeyBinding::simple(KeyCode::End), Action::Last);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self { bindings }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Look up a key as the terminal reported it
    ///
    /// Terminals disagree on whether shifted symbols carry SHIFT, so
    /// character keys are retried with the modifier toggled.
    pub fn resolve(&self, binding: KeyBinding) -> Option<Action> {
        if let Some(action) = self.bindings.get(&binding) {
            return Some(*action);
        }
        if let KeyCode::Char(_) = binding.code {
            let toggled = KeyBinding::new(binding.code, binding.modifiers ^ KeyModifiers::SHIFT);
            return self.bindings.get(&toggled).copied();
        }
        None
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "h", "l", "q", "?"
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-n>", "<C-p>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Home>", "<End>", "<PageUp>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            if let Some(n) = name.strip_prefix(['f', 'F']).and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            // Single character after modifier (e.g., "n" in "<C-n>")
            let mut chars = name.chars();
            let c = chars.next()?;
            chars
                .next()
                .is_none()
                .then(|| KeyCode::Char(c.to_ascii_lowercase()))
        }
    }
}
