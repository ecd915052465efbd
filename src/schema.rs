//! Schemas: field names mapped to ordered rule lists.
//!
//! A [`Schema`] is the declarative half of the engine. Each field
//! carries an ordered list of [`Rule`]s — predicates, the [`Required`]
//! presence marker, combinators, or nested schemas — and the
//! [`validate`](crate::engine::validate) evaluator walks it against a
//! data mapping.

use std::fmt;

use serde_json::{Map, Value};

use crate::combinators::{Each, If, Not};
use crate::engine;
use crate::foundation::{Predicate, Report};

// ============================================================================
// PRESENCE MARKER
// ============================================================================

/// Presence marker: the field's key must exist in the data mapping.
///
/// Not a predicate — the evaluator recognizes it structurally and
/// checks the containing mapping for the key, short-circuiting the
/// field's remaining rules when the key is absent. Fields without it
/// are optional: absent optional fields are skipped entirely and
/// appear nowhere in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

// ============================================================================
// RULES
// ============================================================================

/// One rule attached to a schema field.
///
/// The closed set of rule shapes the evaluator dispatches on. Ordinary
/// predicates and the [`Not`] combinator live behind
/// [`Rule::Check`]; the structural forms get their own variants
/// because they need more than the field's value (the containing
/// mapping, the sub-schema, per-element recursion).
pub enum Rule {
    /// The field's key must be present in the data mapping.
    Required,
    /// An ordinary predicate over the field's value.
    Check(Box<dyn Predicate>),
    /// A sub-schema over the field's value, which should itself be a
    /// mapping.
    Nested(Schema),
    /// Conditional dependency on sibling fields.
    If(If),
    /// Per-element validation over a collection value.
    Each(Each),
}

impl Rule {
    /// Wraps any predicate as a rule.
    ///
    /// Built-in predicates convert implicitly via [`IntoRule`]; this
    /// is the entry point for user-defined [`Predicate`] types.
    pub fn check(predicate: impl Predicate + 'static) -> Self {
        Rule::Check(Box::new(predicate))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("Required"),
            Rule::Check(predicate) => f
                .debug_tuple("Check")
                .field(&predicate.err_message())
                .finish(),
            Rule::Nested(schema) => f.debug_tuple("Nested").field(schema).finish(),
            Rule::If(_) => f.write_str("If"),
            Rule::Each(_) => f.write_str("Each"),
        }
    }
}

/// Conversion seam for everything that can appear in a rule list.
///
/// The [`schema!`](crate::schema!) macro and [`Schema::rule`] accept
/// any `IntoRule`; implement it (or go through [`Rule::check`]) to
/// plug custom predicate types into schema construction.
pub trait IntoRule {
    /// Converts `self` into a [`Rule`].
    fn into_rule(self) -> Rule;
}

impl IntoRule for Rule {
    fn into_rule(self) -> Rule {
        self
    }
}

impl IntoRule for Required {
    fn into_rule(self) -> Rule {
        Rule::Required
    }
}

impl IntoRule for Schema {
    fn into_rule(self) -> Rule {
        Rule::Nested(self)
    }
}

impl IntoRule for If {
    fn into_rule(self) -> Rule {
        Rule::If(self)
    }
}

impl IntoRule for Each {
    fn into_rule(self) -> Rule {
        Rule::Each(self)
    }
}

impl IntoRule for Not {
    fn into_rule(self) -> Rule {
        Rule::check(self)
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// A declarative schema: field names mapped to ordered rule lists.
///
/// Field iteration order is declaration order, and rules within one
/// field are evaluated in list order. Re-declaring a field replaces
/// its rules (map semantics: field names are unique within one level).
///
/// Schemas are immutable once built and carry no state across
/// [`validate`](Schema::validate) calls; a schema shared between
/// threads needs no coordination.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let rules = Schema::new()
///     .field("foo", vec![Rule::Required, Rule::check(equals(1))])
///     .rule("bar", truthy());
///
/// let data = json!({ "foo": 1, "bar": "yes" });
/// assert!(rules.validate(data.as_object().unwrap()).is_valid());
/// ```
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Schema {
    /// Creates an empty schema, which any data mapping satisfies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an ordered rule list to a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = rules;
        } else {
            self.fields.push((name, rules));
        }
        self
    }

    /// Attaches a single bare rule to a field.
    ///
    /// Sugar for a one-element rule list: a bare predicate, `Required`,
    /// or a nested schema all convert.
    #[must_use]
    pub fn rule(self, name: impl Into<String>, rule: impl IntoRule) -> Self {
        self.field(name, vec![rule.into_rule()])
    }

    /// Validates a data mapping against this schema.
    #[must_use]
    pub fn validate(&self, data: &Map<String, Value>) -> Report {
        engine::validate(self, data)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[(String, Vec<Rule>)] {
        &self.fields
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{equals, truthy};

    #[test]
    fn test_declaration_order_preserved() {
        let schema = Schema::new()
            .rule("zeta", truthy())
            .rule("alpha", truthy())
            .rule("mid", truthy());
        let names: Vec<&str> = schema.fields().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_redeclaring_a_field_replaces_rules() {
        let schema = Schema::new()
            .field("foo", vec![Rule::Required, Rule::check(equals(1))])
            .rule("foo", equals(2));
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.fields()[0].1.len(), 1);
    }

    #[test]
    fn test_into_rule_shapes() {
        assert!(matches!(Required.into_rule(), Rule::Required));
        assert!(matches!(Schema::new().into_rule(), Rule::Nested(_)));
        assert!(matches!(equals(1).into_rule(), Rule::Check(_)));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }
}
