//! Key events as seen by the input layer.
//!
//! Crossterm's key codes are the wire format; the engine only ever looks
//! at `code` and `modifiers`, so terminal hosts can convert a crossterm
//! event directly with `From`.

pub use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn char(ch: char) -> Self {
        Self::plain(KeyCode::Char(ch))
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn conversions() {
        assert_eq!(KeyEvent::char('5').code, KeyCode::Char('5'));
        assert_eq!(KeyEvent::from(KeyCode::Backspace).modifiers, KeyModifiers::NONE);

        let raw = crossterm::event::KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(KeyEvent::from(raw), KeyEvent::plain(KeyCode::Tab));
    }
}
