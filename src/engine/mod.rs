pub mod filter;
pub mod normalize;
pub mod percent;
pub mod validate;

use filter::KeystrokeFilter;
use validate::{ValidationFlags, validate};

use crate::core::{InputConfig, Subtype, Value};
use crate::terminal::KeyEvent;

/// Fired after every stored value change, user-driven or programmatic.
pub type ChangeListener = Box<dyn FnMut(Value) + Send>;
/// Fired when the host reports the field as touched (typically on blur).
pub type TouchedListener = Box<dyn FnMut() + Send>;

/// Result of one user edit cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub value: Value,
    pub display: String,
    pub flags: ValidationFlags,
}

/// Result of a programmatic assignment. No flags: external writes reset
/// validation state without re-validating.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub value: Value,
    pub display: String,
}

/// Orchestrates one textbox instance: admission filter, normalization,
/// percent transform, range validation, and observer notification.
///
/// Single-threaded and synchronous; every edit cycle runs to completion
/// before the next keystroke is considered. After a completed cycle the
/// stored (value, display, flags) triple is derived from the current raw
/// string only — no stale numeric value survives a buffer mutation.
///
/// User edits and programmatic writes are distinct entry points:
/// [`InputEngine::process_edit`] normalizes, [`InputEngine::set_external_value`]
/// deliberately does not.
pub struct InputEngine {
    config: InputConfig,
    filter: KeystrokeFilter,
    value: Value,
    display: String,
    flags: ValidationFlags,
    change_listeners: Vec<ChangeListener>,
    touched_listeners: Vec<TouchedListener>,
}

impl InputEngine {
    pub fn new(config: InputConfig) -> Self {
        let filter = KeystrokeFilter::new(config.subtype, config.decimal_separator);
        Self {
            config,
            filter,
            value: Value::None,
            display: String::new(),
            flags: ValidationFlags::default(),
            change_listeners: Vec::new(),
            touched_listeners: Vec::new(),
        }
    }

    /// Replace the session configuration. The admissible-character
    /// pattern is derived from it and rebuilt here, never stored
    /// globally.
    pub fn configure(&mut self, config: InputConfig) {
        if config.decimal_separator != self.config.decimal_separator {
            log::debug!(
                "decimal separator changed: {:?} -> {:?}",
                self.config.decimal_separator,
                config.decimal_separator
            );
        }
        self.filter = KeystrokeFilter::new(config.subtype, config.decimal_separator);
        self.config = config;
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Admission check, run by the host before the buffer mutates.
    pub fn filter_keystroke(&self, key: &KeyEvent) -> bool {
        let admitted = self.filter.admit(key);
        if !admitted {
            log::debug!("keystroke rejected: {:?}", key.code);
        }
        admitted
    }

    /// One full edit cycle over the current buffer contents.
    pub fn process_edit(&mut self, raw: &str) -> EditOutcome {
        let normalized = normalize::normalize(self.config.decimal_separator, raw);

        let (value, display) = if self.config.subtype == Subtype::Percentage {
            match percent::to_fraction(normalized) {
                fraction @ Value::Number(_) => (fraction, raw.to_string()),
                // Blank percentage: no value, and the visible text resets.
                _ => (Value::None, String::new()),
            }
        } else {
            (normalized, raw.to_string())
        };

        let flags = if self.config.validates() {
            validate(
                self.config.subtype,
                value,
                raw.chars().count(),
                self.config.maxlength,
                &self.config.effective_bounds(),
            )
        } else {
            ValidationFlags::default()
        };

        self.value = value;
        self.display = display.clone();
        self.flags = flags;
        log::trace!("edit {raw:?} -> {value:?} {flags:?}");
        self.notify_change();

        EditOutcome {
            value,
            display,
            flags,
        }
    }

    /// Programmatic write: the value becomes both model and display, with
    /// no normalization pass and no re-validation beyond a flag reset.
    pub fn set_external_value(&mut self, value: impl Into<Value>) -> Assignment {
        let value = value.into();
        self.value = value;
        self.display = value.display();
        self.flags.clear();
        self.notify_change();

        Assignment {
            value,
            display: self.display.clone(),
        }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn flags(&self) -> ValidationFlags {
        self.flags
    }

    pub fn subscribe_change(&mut self, listener: impl FnMut(Value) + Send + 'static) {
        self.change_listeners.push(Box::new(listener));
    }

    pub fn subscribe_touched(&mut self, listener: impl FnMut() + Send + 'static) {
        self.touched_listeners.push(Box::new(listener));
    }

    /// Host-driven touched notification (fire-and-forget).
    pub fn notify_touched(&mut self) {
        for listener in &mut self.touched_listeners {
            listener();
        }
    }

    fn notify_change(&mut self) {
        let value = self.value;
        for listener in &mut self.change_listeners {
            listener(value);
        }
    }
}
