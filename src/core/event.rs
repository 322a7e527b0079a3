pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Folds terminal-specific spellings onto one form so that `Ctrl+Shift+w` and
    /// `Ctrl+w` compare equal, and an uppercase char carries an explicit shift.
    pub fn normalized(self) -> Self {
        let Key {
            mut code,
            mut modifiers,
        } = self;
        if let KeyCode::Char(ch) = code {
            if modifiers.contains(KeyModifiers::CONTROL) {
                code = KeyCode::Char(ch.to_ascii_lowercase());
                modifiers.remove(KeyModifiers::SHIFT);
            } else if ch.is_ascii_uppercase() {
                modifiers.insert(KeyModifiers::SHIFT);
            } else if ch.is_ascii_lowercase() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self::new(code, modifiers)
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Key::new(event.code, event.modifiers).normalized()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
