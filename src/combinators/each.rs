//! Per-element validation over collection values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::engine;
use crate::foundation::traits::check_contained;
use crate::foundation::{ErrorMap, Predicate, FALLBACK_MESSAGE};
use crate::schema::Schema;

/// Applies checks to every element of an array value.
///
/// Two modes, chosen at construction:
///
/// * [`Each::list`] — a list of predicates, each applied to every
///   element. A predicate that any element fails records one aggregate
///   message prefixed `"all values "`; which elements failed is not
///   tracked.
/// * [`Each::schema`] — a sub-schema applied to each element (which
///   should itself be a mapping), recording each failing element's full
///   error map keyed by its zero-based index. Passing elements get no
///   entry.
///
/// A non-array value fails with the generic fallback message in either
/// mode.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let rules = schema! {
///     "foo" => [Required, each!([range(0, 10)])],
/// };
///
/// let data = json!({ "foo": [0, 5, 11] });
/// let report = validate(&rules, data.as_object().unwrap());
/// assert_eq!(
///     report.field("foo").unwrap().entries()[0].as_message(),
///     Some("all values must fall between 0 and 10"),
/// );
/// ```
pub struct Each {
    mode: Mode,
}

enum Mode {
    List(Vec<Box<dyn Predicate>>),
    Schema(Schema),
}

/// What one `Each` evaluation produced, for the evaluator to fold into
/// the field's entries.
pub(crate) enum EachOutcome {
    Pass,
    Messages(Vec<String>),
    PerIndex(BTreeMap<usize, ErrorMap>),
}

impl Each {
    /// Per-element predicate mode.
    #[must_use]
    pub fn list(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            mode: Mode::List(predicates),
        }
    }

    /// Per-element sub-schema mode.
    #[must_use]
    pub fn schema(schema: Schema) -> Self {
        Self {
            mode: Mode::Schema(schema),
        }
    }

    pub(crate) fn evaluate(&self, value: &Value) -> EachOutcome {
        let Some(elements) = value.as_array() else {
            return EachOutcome::Messages(vec![FALLBACK_MESSAGE.to_owned()]);
        };
        match &self.mode {
            Mode::List(predicates) => {
                let mut messages = Vec::new();
                for predicate in predicates {
                    let failed = elements
                        .iter()
                        .any(|element| !check_contained(predicate.as_ref(), element));
                    if failed {
                        messages.push(format!("all values {}", predicate.err_message()));
                    }
                }
                if messages.is_empty() {
                    EachOutcome::Pass
                } else {
                    EachOutcome::Messages(messages)
                }
            }
            Mode::Schema(schema) => {
                let mut items = BTreeMap::new();
                for (index, element) in elements.iter().enumerate() {
                    let report = engine::validate_mapping(schema, element);
                    if !report.is_valid() {
                        items.insert(index, report.into_errors());
                    }
                }
                if items.is_empty() {
                    EachOutcome::Pass
                } else {
                    EachOutcome::PerIndex(items)
                }
            }
        }
    }
}
