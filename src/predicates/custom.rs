//! Closure-backed predicates.

use std::fmt;

use serde_json::Value;

use crate::foundation::Predicate;

/// Wraps an arbitrary closure as a predicate, with caller-supplied
/// messages.
///
/// The quickest way to plug one-off logic into a schema without
/// defining a type. The closure runs under the evaluator's unwind
/// boundary like any other predicate, so a panicking closure records a
/// failure rather than crashing validation.
pub struct Custom {
    check: Box<dyn Fn(&Value) -> bool + Send + Sync>,
    err: String,
    not: Option<String>,
}

impl Custom {
    /// Builds a predicate from a failure message and a closure.
    pub fn new(
        err_message: impl Into<String>,
        check: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            check: Box::new(check),
            err: err_message.into(),
            not: None,
        }
    }

    /// Sets the message reported when the predicate is negated.
    #[must_use]
    pub fn with_not_message(mut self, not_message: impl Into<String>) -> Self {
        self.not = Some(not_message.into());
        self
    }
}

impl Predicate for Custom {
    fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        self.not.as_deref()
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").field("err", &self.err).finish()
    }
}

/// A closure-backed predicate.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::custom;
///
/// let even = custom("must be an even number", |v| {
///     v.as_i64().is_some_and(|n| n % 2 == 0)
/// });
/// assert!(even.test(&json!(4)));
/// assert!(!even.test(&json!(3)));
/// ```
pub fn custom(
    err_message: impl Into<String>,
    check: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Custom {
    Custom::new(err_message, check)
}
