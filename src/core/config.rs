use serde::{Deserialize, Serialize};

use crate::core::subtype::Subtype;

/// Bounds applied by the range validator. All three are overridable; the
/// defaults match the original widget family: the largest integer an f64
/// represents exactly, the f64 maximum, and a 1900 year floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub max_integer_magnitude: f64,
    pub max_float_magnitude: f64,
    pub min_year: f64,
}

/// 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_integer_magnitude: MAX_SAFE_INTEGER,
            max_float_magnitude: f64::MAX,
            min_year: 1900.0,
        }
    }
}

impl Bounds {
    pub fn with_min_year(mut self, min_year: f64) -> Self {
        self.min_year = min_year;
        self
    }

    pub fn with_max_integer_magnitude(mut self, magnitude: f64) -> Self {
        self.max_integer_magnitude = magnitude;
        self
    }

    pub fn with_max_float_magnitude(mut self, magnitude: f64) -> Self {
        self.max_float_magnitude = magnitude;
        self
    }
}

/// Session parameters for one textbox instance. Deserializable so hosts
/// can hand the whole object over as configuration.
///
/// The range validator is an additive stage: it only runs when `bounds`
/// or `maxlength` is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub subtype: Subtype,
    pub decimal_separator: char,
    pub maxlength: Option<usize>,
    pub placeholder: Option<String>,
    pub bounds: Option<Bounds>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            subtype: Subtype::default(),
            decimal_separator: '.',
            maxlength: None,
            placeholder: None,
            bounds: None,
        }
    }
}

impl InputConfig {
    pub fn new(subtype: Subtype) -> Self {
        Self {
            subtype,
            ..Self::default()
        }
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whether the range validator participates in edit cycles.
    pub fn validates(&self) -> bool {
        self.bounds.is_some() || self.maxlength.is_some()
    }

    /// Bounds to validate against when the validator is active.
    pub fn effective_bounds(&self) -> Bounds {
        self.bounds.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, InputConfig, MAX_SAFE_INTEGER};
    use crate::core::subtype::Subtype;

    #[test]
    fn config_from_object() {
        let config: InputConfig = serde_json::from_str(
            r#"{ "subtype": "currency", "decimal_separator": ",", "maxlength": 12 }"#,
        )
        .expect("config");
        assert_eq!(config.subtype, Subtype::Currency);
        assert_eq!(config.decimal_separator, ',');
        assert_eq!(config.maxlength, Some(12));
        assert_eq!(config.placeholder, None);
        assert!(config.bounds.is_none());
    }

    #[test]
    fn defaults() {
        let config = InputConfig::default();
        assert_eq!(config.subtype, Subtype::Number);
        assert_eq!(config.decimal_separator, '.');
        assert!(!config.validates());
    }

    #[test]
    fn validator_is_additive() {
        assert!(InputConfig::default().with_maxlength(8).validates());
        assert!(
            InputConfig::new(Subtype::Year)
                .with_bounds(Bounds::default())
                .validates()
        );
    }

    #[test]
    fn default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.max_integer_magnitude, MAX_SAFE_INTEGER);
        assert_eq!(bounds.max_float_magnitude, f64::MAX);
        assert_eq!(bounds.min_year, 1900.0);
    }
}
