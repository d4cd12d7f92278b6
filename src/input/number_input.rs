use unicode_width::UnicodeWidthChar;

use crate::core::{InputConfig, Value};
use crate::engine::InputEngine;
use crate::engine::validate::ValidationFlags;
use crate::input::{KeyResult, text_edit};
use crate::terminal::{KeyCode, KeyEvent};

/// Reference host for [`InputEngine`]: owns the edit buffer, the cursor
/// and the focus bit, and drives the engine the way a widget layer
/// would.
///
/// Every admitted mutation triggers a full re-derivation of the model
/// value from the buffer; rejected keystrokes are consumed before the
/// buffer can change.
pub struct NumberInput {
    engine: InputEngine,
    value: String,
    cursor: usize,
    focused: bool,
}

impl NumberInput {
    pub fn new(config: InputConfig) -> Self {
        Self {
            engine: InputEngine::new(config),
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        // Echo guard: keystrokes only apply to the focused element.
        if !self.focused {
            return KeyResult::NotHandled;
        }
        if !self.engine.filter_keystroke(&key) {
            // Suppressed at the source; the buffer never sees it.
            return KeyResult::Handled;
        }

        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    self.edited();
                }
                KeyResult::Handled
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    self.edited();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                text_edit::move_left(&mut self.cursor, &self.value);
                KeyResult::Handled
            }
            KeyCode::Right => {
                text_edit::move_right(&mut self.cursor, &self.value);
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn edited(&mut self) {
        let outcome = self.engine.process_edit(&self.value);
        // A percentage that resolved to blank resets the visible text.
        if outcome.display != self.value {
            self.value = outcome.display;
            self.cursor = text_edit::clamp_cursor(self.cursor, &self.value);
        }
    }

    /// Programmatic assignment: the display string overwrites the buffer.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        let assignment = self.engine.set_external_value(value);
        self.value = assignment.display;
        self.cursor = text_edit::char_count(&self.value);
    }

    pub fn value(&self) -> Value {
        self.engine.value()
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn flags(&self) -> ValidationFlags {
        self.engine.flags()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.engine.config().placeholder.as_deref()
    }

    pub fn engine_mut(&mut self) -> &mut InputEngine {
        &mut self.engine
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused && !focused {
            self.engine.notify_touched();
        }
        self.focused = focused;
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(text_edit::clamp_cursor(self.cursor, &self.value))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::NumberInput;
    use crate::core::{Bounds, InputConfig, Subtype, Value};
    use crate::input::KeyResult;
    use crate::terminal::{KeyCode, KeyEvent};

    fn focused(config: InputConfig) -> NumberInput {
        let mut input = NumberInput::new(config);
        input.set_focused(true);
        input
    }

    fn type_str(input: &mut NumberInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyEvent::char(ch));
        }
    }

    #[test]
    fn typed_currency_keeps_the_raw_text_and_parses() {
        let mut input = focused(
            InputConfig::new(Subtype::Currency).with_decimal_separator(','),
        );
        type_str(&mut input, "1,234");
        assert_eq!(input.text(), "1,234");
        assert_eq!(input.value(), Value::Number(1.234));
    }

    #[test]
    fn rejected_keystrokes_never_reach_the_buffer() {
        let mut input = focused(InputConfig::new(Subtype::Number));
        type_str(&mut input, "12");
        assert_eq!(input.handle_key(KeyEvent::char('a')), KeyResult::Handled);
        assert_eq!(input.text(), "12");
        assert_eq!(input.value(), Value::Number(12.0));
    }

    #[test]
    fn unfocused_input_ignores_keystrokes() {
        let mut input = NumberInput::new(InputConfig::new(Subtype::Number));
        assert_eq!(input.handle_key(KeyEvent::char('1')), KeyResult::NotHandled);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn percentage_round_trip() {
        let mut input = focused(InputConfig::new(Subtype::Percentage));
        input.set_value(0.5);
        assert_eq!(input.text(), "0.5");

        // Clear and re-type the percent-scale entry.
        for _ in 0..3 {
            input.handle_key(KeyEvent::plain(KeyCode::Backspace));
        }
        assert_eq!(input.value(), Value::None);
        assert_eq!(input.text(), "");

        type_str(&mut input, "50");
        assert_eq!(input.value(), Value::Number(0.5));
        assert_eq!(input.text(), "50");
    }

    #[test]
    fn year_admits_anything_and_validates_after_the_fact() {
        let mut input = focused(
            InputConfig::new(Subtype::Year).with_bounds(Bounds::default()),
        );
        type_str(&mut input, "18x");
        assert_eq!(input.text(), "18x");
        assert!(input.flags().structurally_invalid);

        for _ in 0..3 {
            input.handle_key(KeyEvent::plain(KeyCode::Backspace));
        }
        type_str(&mut input, "2024");
        assert!(input.flags().is_clean());
        assert_eq!(input.value(), Value::Number(2024.0));
    }

    #[test]
    fn enter_submits_only_where_the_filter_admits_it() {
        let mut year = focused(InputConfig::new(Subtype::Year));
        assert_eq!(year.handle_key(KeyEvent::plain(KeyCode::Enter)), KeyResult::Submit);

        let mut number = focused(InputConfig::new(Subtype::Number));
        assert_eq!(
            number.handle_key(KeyEvent::plain(KeyCode::Enter)),
            KeyResult::Handled
        );
    }

    #[test]
    fn cursor_editing_rederives_the_model() {
        let mut input = focused(InputConfig::new(Subtype::Float));
        type_str(&mut input, "125");
        input.handle_key(KeyEvent::plain(KeyCode::Left));
        input.handle_key(KeyEvent::char('.'));
        assert_eq!(input.text(), "12.5");
        assert_eq!(input.value(), Value::Number(12.5));
        assert_eq!(input.cursor_offset_in_content(), 3);
    }

    #[test]
    fn blur_fires_the_touched_notification() {
        let touched = Arc::new(Mutex::new(0usize));
        let mut input = focused(InputConfig::new(Subtype::Number));
        let count = Arc::clone(&touched);
        input
            .engine_mut()
            .subscribe_touched(move || *count.lock().expect("lock") += 1);

        input.set_focused(false);
        assert_eq!(*touched.lock().expect("lock"), 1);
    }
}
