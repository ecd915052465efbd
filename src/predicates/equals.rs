//! Exact equality and the empty-string check.

use serde_json::Value;

use crate::foundation::Predicate;

/// Passes when the value equals the expected value exactly.
///
/// Equality is full JSON equality: type and content both matter, so
/// `1` and `"1"` are unequal, and `1` and `1.0` are distinct number
/// representations.
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Value,
    err: String,
    not: String,
}

impl Equals {
    /// Builds the check against an expected value.
    pub fn new(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        Self {
            err: format!("must be equal to {}", render(&expected)),
            not: format!("must not be equal to {}", render(&expected)),
            expected,
        }
    }
}

impl Predicate for Equals {
    fn test(&self, value: &Value) -> bool {
        *value == self.expected
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Renders a value for a failure message: strings bare, everything
/// else as JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Passes when the value is the empty string.
///
/// Only strings can be blank; any non-string value fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blank;

impl Predicate for Blank {
    fn test(&self, value: &Value) -> bool {
        value.as_str() == Some("")
    }

    fn err_message(&self) -> &str {
        "must be an empty string"
    }

    fn not_message(&self) -> Option<&str> {
        Some("must not be an empty string")
    }
}

/// Equality against an expected value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::equals;
///
/// assert!(equals("bar").test(&json!("bar")));
/// assert!(!equals(1).test(&json!("1")));
/// ```
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals::new(expected)
}

/// The empty-string check.
pub fn blank() -> Blank {
    Blank
}
