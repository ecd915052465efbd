//! Logical negation of a predicate.

use serde_json::Value;

use crate::foundation::{Predicate, FALLBACK_MESSAGE};

/// Inverts a predicate: passes exactly when the inner predicate fails.
///
/// `Not` is itself a [`Predicate`], so it composes anywhere one is
/// accepted, including under another `Not`. The message channels swap:
/// a failing `Not` reports the inner predicate's `not_message`, and
/// negating a `Not` restores the inner predicate's own `err_message`.
///
/// Negation applies to predicates only. The structural rule forms
/// (`Required`, nested schemas, conditionals, per-element validation)
/// are not predicates and cannot be wrapped.
pub struct Not {
    inner: Box<dyn Predicate>,
}

impl Not {
    /// Wraps a predicate, inverting its outcome.
    pub fn new(inner: impl Predicate + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Predicate for Not {
    fn test(&self, value: &Value) -> bool {
        !self.inner.test(value)
    }

    fn err_message(&self) -> &str {
        self.inner.not_message().unwrap_or(FALLBACK_MESSAGE)
    }

    fn not_message(&self) -> Option<&str> {
        Some(self.inner.err_message())
    }
}

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::combinators::not;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::equals;
///
/// let unequal = not(equals(1));
/// assert!(unequal.test(&json!(2)));
/// assert_eq!(unequal.err_message(), "must not be equal to 1");
/// ```
pub fn not(inner: impl Predicate + 'static) -> Not {
    Not::new(inner)
}
