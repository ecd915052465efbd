//! Validation reports and configuration errors.
//!
//! The error tree produced by the evaluator mirrors the shape of the
//! schema that produced it: a map from field name to the failures
//! recorded for that field, where a failure is a message string, a
//! nested error map (sub-schema or conditional dependency), or a map
//! of per-element error maps keyed by index.
//!
//! Serialization reproduces the engine's wire shape: a missing
//! required field serializes to the bare string `"must be present"`,
//! any other failing field to a list of entries.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smallvec::SmallVec;
use thiserror::Error;

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Error raised while *constructing* a schema.
///
/// These are programmer mistakes in the schema itself and are reported
/// immediately at the construction site; they are never folded into a
/// validation [`Report`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// [`Length`](crate::predicates::Length) was given bounds that
    /// admit nothing.
    #[error("length bounds must not both be zero")]
    EmptyLengthBounds,

    /// [`Pattern`](crate::predicates::Pattern) was given a regex that
    /// does not compile.
    #[error("invalid regex pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },
}

// ============================================================================
// ERROR TREE
// ============================================================================

/// Message recorded for a required field that is absent.
pub const MUST_BE_PRESENT: &str = "must be present";

/// Errors accumulated for the fields of one mapping.
pub type ErrorMap = BTreeMap<String, FieldErrors>;

/// Entries recorded for a single failing field, in rule order.
///
/// Most failing fields accumulate one or two entries; the inline
/// capacity avoids a heap allocation for the common case.
pub type Entries = SmallVec<[ErrorEntry; 2]>;

/// One recorded failure for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// A predicate failed; its failure message.
    Message(String),
    /// A nested schema or a triggered conditional dependency failed.
    Group(ErrorMap),
    /// Per-element failures, keyed by zero-based index. Elements that
    /// passed have no entry.
    Items(BTreeMap<usize, ErrorMap>),
}

impl ErrorEntry {
    /// The message, when this entry is a plain predicate failure.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            ErrorEntry::Message(message) => Some(message),
            _ => None,
        }
    }

    /// The nested error map, when this entry came from a sub-schema or
    /// conditional dependency.
    #[must_use]
    pub fn as_group(&self) -> Option<&ErrorMap> {
        match self {
            ErrorEntry::Group(group) => Some(group),
            _ => None,
        }
    }

    /// The per-element error maps, when this entry came from
    /// per-element validation.
    #[must_use]
    pub fn as_items(&self) -> Option<&BTreeMap<usize, ErrorMap>> {
        match self {
            ErrorEntry::Items(items) => Some(items),
            _ => None,
        }
    }
}

/// Everything recorded for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrors {
    /// The field was marked required and its key was absent; no other
    /// rule for the field was evaluated.
    Missing,
    /// The field was present and one or more rules failed.
    Failed(Entries),
}

impl FieldErrors {
    /// Whether this field failed its presence check.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldErrors::Missing)
    }

    /// The recorded entries, empty for a missing field.
    #[must_use]
    pub fn entries(&self) -> &[ErrorEntry] {
        match self {
            FieldErrors::Missing => &[],
            FieldErrors::Failed(entries) => entries,
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The outcome of one [`validate`](crate::engine::validate) call.
///
/// The error map is empty exactly when validation succeeded; the
/// invariant holds by construction because the report is built from
/// the accumulated errors and nothing else.
///
/// A field absent from the data and not required appears nowhere in
/// the report — omission, not a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    errors: ErrorMap,
}

impl Report {
    pub(crate) fn from_errors(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The full error map.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consumes the report, yielding the error map.
    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// The failures recorded for one field, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldErrors> {
        self.errors.get(name)
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldErrors::Missing => serializer.serialize_str(MUST_BE_PRESENT),
            FieldErrors::Failed(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for entry in entries {
                    seq.serialize_element(entry)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for ErrorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorEntry::Message(message) => serializer.serialize_str(message),
            ErrorEntry::Group(group) => group.serialize(serializer),
            ErrorEntry::Items(items) => {
                let mut map = serializer.serialize_map(Some(items.len()))?;
                for (index, errors) in items {
                    map.serialize_entry(index, errors)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("valid");
        }
        writeln!(f, "validation failed:")?;
        fmt_map(f, &self.errors, "")
    }
}

fn fmt_map(f: &mut fmt::Formatter<'_>, map: &ErrorMap, prefix: &str) -> fmt::Result {
    for (field, errors) in map {
        let path = if prefix.is_empty() {
            field.clone()
        } else {
            format!("{prefix}.{field}")
        };
        match errors {
            FieldErrors::Missing => writeln!(f, "  {path}: {MUST_BE_PRESENT}")?,
            FieldErrors::Failed(entries) => {
                for entry in entries {
                    match entry {
                        ErrorEntry::Message(message) => writeln!(f, "  {path}: {message}")?,
                        ErrorEntry::Group(group) => fmt_map(f, group, &path)?,
                        ErrorEntry::Items(items) => {
                            for (index, group) in items {
                                fmt_map(f, group, &format!("{path}[{index}]"))?;
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use smallvec::smallvec;

    fn sample_report() -> Report {
        let mut errors = ErrorMap::new();
        errors.insert("name".to_owned(), FieldErrors::Missing);
        errors.insert(
            "age".to_owned(),
            FieldErrors::Failed(smallvec![ErrorEntry::Message(
                "must fall between 0 and 130".to_owned()
            )]),
        );
        Report::from_errors(errors)
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = Report::from_errors(ErrorMap::new());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_missing_serializes_to_bare_string() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["name"], json!("must be present"));
        assert_eq!(value["age"], json!(["must fall between 0 and 130"]));
    }

    #[test]
    fn test_items_serialize_with_index_keys() {
        let mut inner = ErrorMap::new();
        inner.insert(
            "qux".to_owned(),
            FieldErrors::Failed(smallvec![ErrorEntry::Message("too big".to_owned())]),
        );
        let mut errors = ErrorMap::new();
        errors.insert(
            "bar".to_owned(),
            FieldErrors::Failed(smallvec![ErrorEntry::Items(BTreeMap::from([(
                1usize,
                inner
            )]))]),
        );
        let value = serde_json::to_value(Report::from_errors(errors)).unwrap();
        assert_eq!(value, json!({ "bar": [{ "1": { "qux": ["too big"] } }] }));
    }

    #[test]
    fn test_display_paths() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("name: must be present"));
        assert!(rendered.contains("age: must fall between 0 and 130"));
    }

    #[test]
    fn test_field_accessors() {
        let report = sample_report();
        assert!(report.field("name").unwrap().is_missing());
        assert_eq!(
            report.field("age").unwrap().entries()[0].as_message(),
            Some("must fall between 0 and 130")
        );
        assert!(report.field("absent").is_none());
    }

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::EmptyLengthBounds.to_string(),
            "length bounds must not both be zero"
        );
    }
}
