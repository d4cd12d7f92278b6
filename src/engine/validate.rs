use crate::core::{Bounds, Subtype, Value};

/// Advisory validation state, recomputed from scratch on every pass.
/// The flags only describe the current buffer for host styling; they
/// never block the model value from being stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationFlags {
    /// Magnitude bound exceeded, or the buffer is longer than the
    /// configured maxlength.
    pub length_or_magnitude_invalid: bool,
    /// The buffer held text that did not parse, or a year below the
    /// configured minimum.
    pub structurally_invalid: bool,
}

impl ValidationFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Classify `value` against the subtype's bounds.
///
/// A sentinel value paired with non-empty input means the text failed to
/// parse; that is flagged structurally invalid and takes precedence over
/// every subtype-specific check.
pub fn validate(
    subtype: Subtype,
    value: Value,
    raw_len: usize,
    maxlength: Option<usize>,
    bounds: &Bounds,
) -> ValidationFlags {
    let mut flags = ValidationFlags::default();

    if raw_len > 0 && value.is_empty() {
        flags.structurally_invalid = true;
        return flags;
    }

    if let Some(maxlength) = maxlength
        && raw_len > maxlength
    {
        flags.length_or_magnitude_invalid = true;
    }

    let Some(number) = value.as_number() else {
        return flags;
    };

    match subtype {
        Subtype::Number | Subtype::Currency => {
            if number.abs() > bounds.max_integer_magnitude {
                flags.length_or_magnitude_invalid = true;
            }
        }
        Subtype::Float | Subtype::Percentage => {
            if number.abs() > bounds.max_float_magnitude {
                flags.length_or_magnitude_invalid = true;
            }
        }
        Subtype::Year => {
            if number < bounds.min_year {
                flags.structurally_invalid = true;
            }
        }
    }

    flags
}
