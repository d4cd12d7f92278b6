use regex::Regex;

use crate::core::Subtype;
use crate::terminal::{KeyCode, KeyEvent};

/// Digits plus minus, the `number` subtype's character class.
const NUMBERS_ONLY: &str = "[0-9-]";

/// Navigation/deletion keys that bypass the character-class check
/// entirely.
const UTILITY_KEYS: [KeyCode; 5] = [
    KeyCode::Backspace,
    KeyCode::Delete,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Tab,
];

/// Decides whether a keystroke may reach the edit buffer.
///
/// The admissible pattern is derived state, cached per instance and
/// rebuilt whenever the configuration changes; the host must consult
/// [`KeystrokeFilter::admit`] *before* mutating the buffer and suppress
/// rejected keystrokes at the source. Rejection is not an error and sets
/// no flag.
pub struct KeystrokeFilter {
    admissible: Option<Regex>,
}

impl KeystrokeFilter {
    pub fn new(subtype: Subtype, decimal_separator: char) -> Self {
        let admissible = if subtype == Subtype::Number {
            Some(compile_class(NUMBERS_ONLY))
        } else if subtype.uses_decimal_separator() {
            let class = format!(
                "[0-9{}]",
                regex::escape(decimal_separator.encode_utf8(&mut [0u8; 4]))
            );
            Some(compile_class(&class))
        } else {
            // `year` and anything else: unfiltered.
            None
        };
        Self { admissible }
    }

    pub fn admit(&self, key: &KeyEvent) -> bool {
        let Some(pattern) = &self.admissible else {
            return true;
        };
        if UTILITY_KEYS.contains(&key.code) {
            return true;
        }
        match key.code {
            KeyCode::Char(ch) => pattern.is_match(ch.encode_utf8(&mut [0u8; 4])),
            _ => false,
        }
    }
}

fn compile_class(class: &str) -> Regex {
    // The class is assembled from a constant plus an escaped separator,
    // so compilation cannot fail on user input.
    Regex::new(class).expect("invalid admissible-character class")
}
