//! The evaluator: walks a schema against a data mapping.

use serde_json::{Map, Value};

use crate::combinators::EachOutcome;
use crate::foundation::traits::check_contained;
use crate::foundation::{Entries, ErrorEntry, ErrorMap, FieldErrors, Report};
use crate::schema::{Rule, Schema};

/// Validates a data mapping against a schema.
///
/// A pure function of its arguments: it reads the schema and the data,
/// allocates a fresh [`Report`], and shares nothing — concurrent calls
/// need no coordination.
///
/// For each schema field, in declaration order:
///
/// 1. If the field's rule list contains the
///    [`Required`](crate::schema::Required) marker and the key is
///    absent, the field records `"must be present"` and its remaining
///    rules are skipped.
/// 2. An absent optional field is skipped entirely — no evaluation, no
///    report entry.
/// 3. Otherwise every rule runs in list order and failures accumulate;
///    independent rules never short-circuit one another.
///
/// Predicate invocations run inside an unwind boundary: a predicate
/// that panics against malformed data records its failure message like
/// any other failed check.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let rules = schema! {
///     "foo" => [Required, equals(1)],
/// };
///
/// let data = json!({ "foo": 2 });
/// let report = validate(&rules, data.as_object().unwrap());
/// assert_eq!(
///     report.field("foo").unwrap().entries()[0].as_message(),
///     Some("must be equal to 1"),
/// );
/// ```
#[must_use]
pub fn validate(schema: &Schema, data: &Map<String, Value>) -> Report {
    let mut errors = ErrorMap::new();
    for (key, rules) in schema.fields() {
        if let Some(field_errors) = evaluate_field(key, rules, data) {
            errors.insert(key.clone(), field_errors);
        }
    }
    Report::from_errors(errors)
}

fn evaluate_field(key: &str, rules: &[Rule], data: &Map<String, Value>) -> Option<FieldErrors> {
    let required = rules.iter().any(|rule| matches!(rule, Rule::Required));
    let value = data.get(key);
    if required && value.is_none() {
        return Some(FieldErrors::Missing);
    }
    let value = value?;

    let mut entries = Entries::new();
    for rule in rules {
        match rule {
            Rule::Required => {}
            Rule::Check(predicate) => {
                if !check_contained(predicate.as_ref(), value) {
                    entries.push(ErrorEntry::Message(predicate.err_message().to_owned()));
                }
            }
            Rule::Nested(sub_schema) => {
                let report = validate_mapping(sub_schema, value);
                if !report.is_valid() {
                    entries.push(ErrorEntry::Group(report.into_errors()));
                }
            }
            Rule::If(conditional) => {
                if let Some(nested) = conditional.evaluate(value, data) {
                    entries.push(ErrorEntry::Group(nested));
                }
            }
            Rule::Each(each) => match each.evaluate(value) {
                EachOutcome::Pass => {}
                EachOutcome::Messages(messages) => {
                    entries.extend(messages.into_iter().map(ErrorEntry::Message));
                }
                EachOutcome::PerIndex(items) => {
                    entries.push(ErrorEntry::Items(items));
                }
            },
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(FieldErrors::Failed(entries))
    }
}

/// Validates a value that should be mapping-shaped.
///
/// A non-mapping value is validated as an empty mapping, so required
/// sub-fields still produce a structured report instead of an opaque
/// failure.
pub(crate) fn validate_mapping(schema: &Schema, value: &Value) -> Report {
    match value.as_object() {
        Some(object) => validate(schema, object),
        None => validate(schema, &Map::new()),
    }
}
