//! JSON kind classification and the kind-lattice checks.

use std::fmt;

use serde_json::Value;

use crate::foundation::Predicate;

/// The kind of a JSON value, with integers and floats distinguished
/// below a common `Number` parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number without a fractional representation.
    Integer,
    /// A number with a fractional representation.
    Float,
    /// Any number; the parent of [`Kind::Integer`] and [`Kind::Float`].
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// A mapping.
    Object,
}

impl Kind {
    /// Classifies a value. Numbers classify as their concrete subkind,
    /// never as [`Kind::Number`] directly.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_f64() => Kind::Float,
            Value::Number(_) => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Whether `self` is `parent` or one of its subkinds. The only
    /// strict subkind edges are `Integer <: Number` and
    /// `Float <: Number`.
    #[must_use]
    pub fn is_subkind_of(self, parent: Kind) -> bool {
        self == parent || (parent == Kind::Number && matches!(self, Kind::Integer | Kind::Float))
    }

    /// Looks a kind up by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "null" => Kind::Null,
            "bool" => Kind::Bool,
            "integer" => Kind::Integer,
            "float" => Kind::Float,
            "number" => Kind::Number,
            "string" => Kind::String,
            "array" => Kind::Array,
            "object" => Kind::Object,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Passes when the value's kind is the expected kind or one of its
/// subkinds; an integer satisfies `instance_of(Kind::Number)`.
#[derive(Debug, Clone)]
pub struct InstanceOf {
    kind: Kind,
    err: String,
    not: String,
}

impl InstanceOf {
    /// Builds the check against an expected kind.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            err: format!("must be an instance of {kind} or its subclasses"),
            not: format!("must not be an instance of {kind} or its subclasses"),
            kind,
        }
    }
}

impl Predicate for InstanceOf {
    fn test(&self, value: &Value) -> bool {
        Kind::of(value).is_subkind_of(self.kind)
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Passes when the value is a string naming the expected kind or one
/// of its subkinds; `"integer"` satisfies `subclass_of(Kind::Number)`.
#[derive(Debug, Clone)]
pub struct SubclassOf {
    kind: Kind,
    err: String,
    not: String,
}

impl SubclassOf {
    /// Builds the check against an expected parent kind.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            err: format!("must be a subclass of {kind}"),
            not: format!("must not be a subclass of {kind}"),
            kind,
        }
    }
}

impl Predicate for SubclassOf {
    fn test(&self, value: &Value) -> bool {
        value
            .as_str()
            .and_then(Kind::from_name)
            .is_some_and(|named| named.is_subkind_of(self.kind))
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Kind membership for the value itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::{instance_of, Kind};
///
/// assert!(instance_of(Kind::Number).test(&json!(10)));
/// assert!(!instance_of(Kind::Integer).test(&json!(10.5)));
/// ```
pub fn instance_of(kind: Kind) -> InstanceOf {
    InstanceOf::new(kind)
}

/// Kind membership for a kind named by the value.
pub fn subclass_of(kind: Kind) -> SubclassOf {
    SubclassOf::new(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), Kind::Null)]
    #[case(json!(true), Kind::Bool)]
    #[case(json!(7), Kind::Integer)]
    #[case(json!(7.5), Kind::Float)]
    #[case(json!("x"), Kind::String)]
    #[case(json!([]), Kind::Array)]
    #[case(json!({}), Kind::Object)]
    fn test_kind_classification(#[case] value: Value, #[case] expected: Kind) {
        assert_eq!(Kind::of(&value), expected);
    }

    #[test]
    fn test_number_subkind_lattice() {
        assert!(Kind::Integer.is_subkind_of(Kind::Number));
        assert!(Kind::Float.is_subkind_of(Kind::Number));
        assert!(Kind::Number.is_subkind_of(Kind::Number));
        assert!(!Kind::Number.is_subkind_of(Kind::Integer));
        assert!(!Kind::String.is_subkind_of(Kind::Number));
    }

    #[test]
    fn test_instance_of_accepts_subkinds() {
        assert!(instance_of(Kind::Number).test(&json!(1)));
        assert!(instance_of(Kind::Number).test(&json!(1.5)));
        assert!(instance_of(Kind::Integer).test(&json!(1)));
        assert!(!instance_of(Kind::Integer).test(&json!(1.5)));
        assert!(!instance_of(Kind::String).test(&json!(1)));
    }

    #[test]
    fn test_subclass_of_reads_kind_names() {
        assert!(subclass_of(Kind::Number).test(&json!("integer")));
        assert!(subclass_of(Kind::Number).test(&json!("number")));
        assert!(!subclass_of(Kind::Number).test(&json!("string")));
        assert!(!subclass_of(Kind::Number).test(&json!("nonsense")));
        assert!(!subclass_of(Kind::Number).test(&json!(1)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            instance_of(Kind::String).err_message(),
            "must be an instance of string or its subclasses"
        );
        assert_eq!(
            subclass_of(Kind::Number).err_message(),
            "must be a subclass of number"
        );
    }
}
