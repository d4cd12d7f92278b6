use crate::core::Value;

/// Rewrite the locale separator to `.` and parse.
///
/// Only the **first** occurrence of the separator is substituted; a
/// string containing it twice is deliberately left half-normalized
/// (observed behavior of the widget family, kept as-is). Empty input and
/// parse failures both yield the `Unparsed` sentinel — never zero, never
/// NaN.
pub fn normalize(decimal_separator: char, raw: &str) -> Value {
    let canonical = if decimal_separator != '.' && !raw.is_empty() {
        raw.replacen(decimal_separator, ".", 1)
    } else {
        raw.to_string()
    };

    match canonical.trim().parse::<f64>() {
        Ok(number) if !number.is_nan() => Value::Number(number),
        _ => Value::Unparsed,
    }
}
