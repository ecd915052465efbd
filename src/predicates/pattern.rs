//! Regex matching anchored at the start of the value.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Predicate, SchemaError};

/// Passes when the value is a string the pattern matches at position
/// zero.
///
/// Matching is anchored at the start only: `r"\d\d%"` accepts both
/// `"39%"` and `"39% flat"`, but rejects `"flat 39%"`. Non-string
/// values fail.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    err: String,
    not: String,
}

impl Pattern {
    /// Compiles the pattern.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidPattern`] when the regex does not compile.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: source.to_string(),
        })?;
        Ok(Self {
            err: format!("must match regex pattern {pattern}"),
            not: format!("must not match regex pattern {pattern}"),
            regex,
        })
    }
}

impl Predicate for Pattern {
    fn test(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| {
            self.regex
                .find(s)
                .is_some_and(|found| found.start() == 0)
        })
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// A start-anchored regex match.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::pattern;
///
/// let check = pattern(r"\d\d%")?;
/// assert!(check.test(&json!("39%")));
/// assert!(!check.test(&json!("ab%")));
/// # Ok::<(), vouch::foundation::SchemaError>(())
/// ```
pub fn pattern(pattern: &str) -> Result<Pattern, SchemaError> {
    Pattern::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_is_anchored_at_start() {
        let check = pattern(r"\d\d%").unwrap();
        assert!(check.test(&json!("39%")));
        assert!(check.test(&json!("39% flat")));
        assert!(!check.test(&json!("flat 39%")));
        assert!(!check.test(&json!("ab%")));
    }

    #[test]
    fn test_non_strings_fail() {
        let check = pattern(r"\d+").unwrap();
        assert!(!check.test(&json!(39)));
        assert!(!check.test(&json!(null)));
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        let err = pattern("(unclosed").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { .. }));
    }

    #[test]
    fn test_messages_embed_the_source() {
        let check = pattern(r"\d\d%").unwrap();
        assert_eq!(check.err_message(), r"must match regex pattern \d\d%");
        assert_eq!(
            check.not_message(),
            Some(r"must not match regex pattern \d\d%")
        );
    }
}
