//! Truthiness over JSON values.

use serde_json::Value;

use crate::foundation::Predicate;

/// Passes for truth-equivalent values.
///
/// Falsy values: `null`, `false`, numeric zero, the empty string, the
/// empty array, and the empty mapping. Everything else is truthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truthy;

/// Whether a value is truth-equivalent.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl Predicate for Truthy {
    fn test(&self, value: &Value) -> bool {
        is_truthy(value)
    }

    fn err_message(&self) -> &str {
        "must be True-equivalent value"
    }

    fn not_message(&self) -> Option<&str> {
        Some("must be False-equivalent value")
    }
}

/// The truthiness check.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::truthy;
///
/// assert!(truthy().test(&json!([1])));
/// assert!(!truthy().test(&json!(0)));
/// ```
pub fn truthy() -> Truthy {
    Truthy
}
