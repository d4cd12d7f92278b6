/// Model value exposed to the surrounding form system.
///
/// `Unparsed` is the empty-string sentinel: the buffer held text that did
/// not parse. It is distinct both from numeric zero and from `None`
/// ("nothing assigned"), and callers must treat it as "no model value",
/// never as an invalid-but-numeric NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Unparsed,
    Number(f64),
}

impl Value {
    /// True for both sentinel states (`None` and `Unparsed`).
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Number(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Display form: the number's shortest rendering, or an empty string
    /// for either sentinel.
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
