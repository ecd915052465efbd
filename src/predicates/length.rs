//! Collection and string length bounds.

use serde_json::Value;

use crate::foundation::{Predicate, SchemaError};

/// Passes when the value's length falls within bounds.
///
/// Length is element count: characters for a string, elements for an
/// array, entries for a mapping. A `maximum` of zero means unbounded
/// above. Values without a length fail.
#[derive(Debug, Clone)]
pub struct Length {
    minimum: usize,
    maximum: usize,
    err: String,
    not: String,
}

impl Length {
    /// Builds the check; `maximum == 0` leaves it unbounded above.
    ///
    /// # Errors
    ///
    /// [`SchemaError::EmptyLengthBounds`] when both bounds are zero,
    /// which would constrain nothing.
    pub fn new(minimum: usize, maximum: usize) -> Result<Self, SchemaError> {
        let (err, not) = match (minimum, maximum) {
            (0, 0) => return Err(SchemaError::EmptyLengthBounds),
            (_, 0) => (
                format!("must be at least {minimum} elements in length"),
                format!("must not be at least {minimum} elements in length"),
            ),
            (0, _) => (
                format!("must be at most {maximum} elements in length"),
                format!("must not be at most {maximum} elements in length"),
            ),
            _ => (
                format!("must be between {minimum} and {maximum} elements in length"),
                format!("must not be between {minimum} and {maximum} elements in length"),
            ),
        };
        Ok(Self {
            minimum,
            maximum,
            err,
            not,
        })
    }
}

fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        Value::Object(o) => Some(o.len()),
        _ => None,
    }
}

impl Predicate for Length {
    fn test(&self, value: &Value) -> bool {
        let Some(length) = measure(value) else {
            return false;
        };
        length >= self.minimum && (self.maximum == 0 || length <= self.maximum)
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Length bounds over strings, arrays, and mappings.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::length;
///
/// let check = length(2, 4)?;
/// assert!(check.test(&json!("abc")));
/// assert!(!check.test(&json!([1])));
/// # Ok::<(), vouch::foundation::SchemaError>(())
/// ```
pub fn length(minimum: usize, maximum: usize) -> Result<Length, SchemaError> {
    Length::new(minimum, maximum)
}
