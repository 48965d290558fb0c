//! Field coercion utilities
//!
//! Total functions over arbitrary JSON values. Every coercion either
//! succeeds or returns the caller's fallback; nothing here panics or errors.

use serde_json::Value;

/// Coerce a JSON value to a finite number, falling back when the value is
/// absent, null, or does not convert.
///
/// Numeric strings are accepted (`"120"` coerces to `120.0`); NaN and
/// infinities are treated as non-numeric.
pub fn to_number(value: Option<&Value>, fallback: f64) -> f64 {
    to_number_opt(value).unwrap_or(fallback)
}

/// Coerce a JSON value to a finite number, or `None`.
pub fn to_number_opt(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Extract a trimmed, non-empty string, or `None`.
pub fn trimmed_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}
