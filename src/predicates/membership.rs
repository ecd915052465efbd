//! Membership checks: value-in-collection and collection-contains-value.

use serde_json::Value;

use super::equals::render;
use crate::foundation::Predicate;

/// Passes when the value is one of a fixed set of choices.
#[derive(Debug, Clone)]
pub struct In {
    choices: Vec<Value>,
    err: String,
    not: String,
}

impl In {
    /// Builds the check from the allowed choices.
    #[must_use]
    pub fn new(choices: Vec<Value>) -> Self {
        let rendered = choices
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            err: format!("must be one of [{rendered}]"),
            not: format!("must not be one of [{rendered}]"),
            choices,
        }
    }
}

impl Predicate for In {
    fn test(&self, value: &Value) -> bool {
        self.choices.contains(value)
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Passes when the value contains a needle.
///
/// Containment depends on the value's shape: an array must hold the
/// needle as an element, a mapping must hold it as a key (the needle
/// must then be a string), and a string must hold it as a substring.
/// Any other value shape fails.
#[derive(Debug, Clone)]
pub struct Contains {
    needle: Value,
    err: String,
    not: String,
}

impl Contains {
    /// Builds the check from the needle to look for.
    pub fn new(needle: impl Into<Value>) -> Self {
        let needle = needle.into();
        Self {
            err: format!("must contain {}", render(&needle)),
            not: format!("must not contain {}", render(&needle)),
            needle,
        }
    }
}

impl Predicate for Contains {
    fn test(&self, value: &Value) -> bool {
        match value {
            Value::Array(elements) => elements.contains(&self.needle),
            Value::Object(map) => self.needle.as_str().is_some_and(|key| map.contains_key(key)),
            Value::String(haystack) => self
                .needle
                .as_str()
                .is_some_and(|fragment| haystack.contains(fragment)),
            _ => false,
        }
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Membership in a fixed set of choices.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::one_of;
///
/// let check = one_of(vec![json!(1), json!(2), json!(3)]);
/// assert!(check.test(&json!(2)));
/// assert_eq!(check.err_message(), "must be one of [1, 2, 3]");
/// ```
pub fn one_of(choices: Vec<Value>) -> In {
    In::new(choices)
}

/// Containment of a needle in an array, mapping, or string.
pub fn contains(needle: impl Into<Value>) -> Contains {
    Contains::new(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_of_membership() {
        let check = one_of(vec![json!(1), json!("two")]);
        assert!(check.test(&json!(1)));
        assert!(check.test(&json!("two")));
        assert!(!check.test(&json!(2)));
    }

    #[test]
    fn test_one_of_message_lists_choices() {
        let check = one_of(vec![json!(1), json!(2), json!(3)]);
        assert_eq!(check.err_message(), "must be one of [1, 2, 3]");
        assert_eq!(check.not_message(), Some("must not be one of [1, 2, 3]"));
    }

    #[test]
    fn test_contains_array_element() {
        assert!(contains(3).test(&json!([1, 2, 3])));
        assert!(!contains(4).test(&json!([1, 2, 3])));
    }

    #[test]
    fn test_contains_mapping_key() {
        assert!(contains("step").test(&json!({ "step": 13 })));
        assert!(!contains("other").test(&json!({ "step": 13 })));
        // A non-string needle can never be a mapping key.
        assert!(!contains(13).test(&json!({ "step": 13 })));
    }

    #[test]
    fn test_contains_substring() {
        assert!(contains("oo").test(&json!("food")));
        assert!(!contains("zz").test(&json!("food")));
    }

    #[test]
    fn test_contains_rejects_other_shapes() {
        assert!(!contains(1).test(&json!(11)));
        assert!(!contains(1).test(&json!(null)));
    }

    #[test]
    fn test_contains_messages() {
        let check = contains("oo");
        assert_eq!(check.err_message(), "must contain oo");
        assert_eq!(check.not_message(), Some("must not contain oo"));
    }
}
