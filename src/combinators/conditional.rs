//! Conditional dependencies between sibling fields.

use serde_json::{Map, Value};

use crate::engine;
use crate::foundation::traits::check_contained;
use crate::foundation::{ErrorMap, Predicate};
use crate::schema::Schema;

/// The dependent half of a conditional: a schema applied to the whole
/// containing mapping when the guard fires.
#[derive(Debug)]
pub struct Then {
    schema: Schema,
}

impl Then {
    /// Wraps the dependent schema.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }
}

/// Conditional dependency: when the guard predicate passes against the
/// attached field's value, the dependent schema is validated against
/// the *containing mapping*, so it can reach sibling fields.
///
/// A failing guard means the conditional simply does not apply; it
/// records nothing either way except the dependent schema's failures.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// // When foo is 1, bar must equal 2.
/// let rules = schema! {
///     "foo" => [If::new(equals(1), Then::new(schema! {
///         "bar" => [Required, equals(2)],
///     }))],
/// };
///
/// let data = json!({ "foo": 1, "bar": 3 });
/// assert!(!validate(&rules, data.as_object().unwrap()).is_valid());
///
/// let data = json!({ "foo": 2, "bar": 3 });
/// assert!(validate(&rules, data.as_object().unwrap()).is_valid());
/// ```
pub struct If {
    guard: Box<dyn Predicate>,
    then: Then,
}

impl If {
    /// Builds a conditional from a guard predicate and its dependent
    /// schema.
    pub fn new(guard: impl Predicate + 'static, then: Then) -> Self {
        Self {
            guard: Box::new(guard),
            then,
        }
    }

    /// Runs the conditional: `value` is the attached field's value,
    /// `data` the containing mapping. Returns the dependent schema's
    /// errors when the guard fired and the schema failed.
    pub(crate) fn evaluate(&self, value: &Value, data: &Map<String, Value>) -> Option<ErrorMap> {
        if !check_contained(self.guard.as_ref(), value) {
            return None;
        }
        let report = engine::validate(&self.then.schema, data);
        if report.is_valid() {
            None
        } else {
            Some(report.into_errors())
        }
    }
}
