use serde::{Deserialize, Serialize};

/// Numeric flavor of a textbox. Fixed per instance after configuration;
/// decides which admission and validation rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subtype {
    #[default]
    Number,
    Currency,
    Float,
    Percentage,
    Year,
}

impl Subtype {
    /// Subtypes whose edit buffer may contain the configured decimal
    /// separator.
    pub fn uses_decimal_separator(self) -> bool {
        matches!(self, Self::Currency | Self::Float | Self::Percentage)
    }

    /// `Year` is never filtered at the keystroke level; everything it
    /// needs is caught post-hoc by the validator.
    pub fn is_keystroke_filtered(self) -> bool {
        !matches!(self, Self::Year)
    }
}

#[cfg(test)]
mod tests {
    use super::Subtype;

    #[test]
    fn serde_names_are_lowercase() {
        let parsed: Subtype = serde_json::from_str("\"percentage\"").expect("subtype");
        assert_eq!(parsed, Subtype::Percentage);
        assert_eq!(
            serde_json::to_string(&Subtype::Currency).expect("json"),
            "\"currency\""
        );
    }

    #[test]
    fn year_is_unfiltered() {
        assert!(!Subtype::Year.is_keystroke_filtered());
        assert!(Subtype::Number.is_keystroke_filtered());
    }

    #[test]
    fn decimal_separator_subtypes() {
        assert!(Subtype::Currency.uses_decimal_separator());
        assert!(Subtype::Float.uses_decimal_separator());
        assert!(Subtype::Percentage.uses_decimal_separator());
        assert!(!Subtype::Number.uses_decimal_separator());
        assert!(!Subtype::Year.uses_decimal_separator());
    }
}
