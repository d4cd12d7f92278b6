use crate::core::Value;

/// Map a percent-scale number to its fractional model value.
///
/// The fraction is fixed to six decimal places and re-parsed from its
/// minimal rendering (trailing zeros and a trailing point stripped) so
/// float tail noise like `0.33333333000000004` never reaches the model.
/// Sentinel input maps to `Value::None`: a blank percentage has no
/// zero-when-blank fallback.
pub fn to_fraction(normalized: Value) -> Value {
    let Value::Number(number) = normalized else {
        return Value::None;
    };

    let fixed = format!("{:.6}", number / 100.0);
    let minimal = fixed.trim_end_matches('0').trim_end_matches('.');
    match minimal.parse::<f64>() {
        Ok(fraction) => Value::Number(fraction),
        Err(_) => Value::None,
    }
}
