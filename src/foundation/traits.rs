//! The predicate capability trait.
//!
//! Every check in the engine — built-in or user-supplied — implements
//! [`Predicate`]: a pure test over one JSON value plus the
//! human-readable messages the evaluator surfaces on failure.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;

/// Message reported for predicates that declare no message of their own.
pub const FALLBACK_MESSAGE: &str = "failed validation";

/// A single-purpose check against one value.
///
/// Implementations are immutable and side-effect free: `test` may be
/// called any number of times, from any thread, in any order. Messages
/// are expected to be built once at construction time with the
/// predicate's parameters embedded.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use vouch::foundation::Predicate;
///
/// struct IsNull;
///
/// impl Predicate for IsNull {
///     fn test(&self, value: &Value) -> bool {
///         value.is_null()
///     }
///
///     fn err_message(&self) -> &str {
///         "must be null"
///     }
/// }
///
/// assert!(IsNull.test(&json!(null)));
/// assert!(!IsNull.test(&json!(0)));
/// ```
pub trait Predicate: Send + Sync {
    /// Checks the value, returning `true` when it passes.
    fn test(&self, value: &Value) -> bool;

    /// Message recorded when the predicate is used directly and fails.
    fn err_message(&self) -> &str;

    /// Message recorded when the predicate is wrapped in
    /// [`Not`](crate::combinators::Not) and the un-negated predicate
    /// would have passed.
    ///
    /// Predicates without one report [`FALLBACK_MESSAGE`] when negated.
    fn not_message(&self) -> Option<&str> {
        None
    }
}

/// Runs a predicate inside an unwind boundary.
///
/// A predicate that panics against an unexpected value shape counts as
/// a plain failure: malformed input data must produce a structured
/// report, not a crash.
pub(crate) fn check_contained(predicate: &dyn Predicate, value: &Value) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| predicate.test(value))).unwrap_or(false)
}
