//! Numeric interval and lower-bound checks.

use serde_json::Value;

use crate::foundation::Predicate;

/// Passes when the value is a number within an interval.
///
/// Bounds are inclusive by default; [`Range::exclusive`] excludes both
/// endpoints. Non-numeric values fail.
#[derive(Debug, Clone)]
pub struct Range {
    start: f64,
    end: f64,
    inclusive: bool,
    err: String,
    not: String,
}

impl Range {
    /// An interval including both endpoints.
    pub fn new(start: impl Into<f64>, end: impl Into<f64>) -> Self {
        Self::build(start.into(), end.into(), true)
    }

    /// An interval excluding both endpoints.
    pub fn exclusive(start: impl Into<f64>, end: impl Into<f64>) -> Self {
        Self::build(start.into(), end.into(), false)
    }

    fn build(start: f64, end: f64, inclusive: bool) -> Self {
        Self {
            err: format!("must fall between {start} and {end}"),
            not: format!("must not fall between {start} and {end}"),
            start,
            end,
            inclusive,
        }
    }
}

impl Predicate for Range {
    fn test(&self, value: &Value) -> bool {
        let Some(number) = value.as_f64() else {
            return false;
        };
        if self.inclusive {
            self.start <= number && number <= self.end
        } else {
            self.start < number && number < self.end
        }
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// Passes when the value is a number above a lower bound.
///
/// The bound itself fails unless the check was built with
/// [`GreaterThan::inclusive`]. Non-numeric values fail.
#[derive(Debug, Clone)]
pub struct GreaterThan {
    bound: f64,
    inclusive: bool,
    err: String,
    not: String,
}

impl GreaterThan {
    /// A strict lower bound.
    pub fn new(bound: impl Into<f64>) -> Self {
        Self::build(bound.into(), false)
    }

    /// A lower bound where the bound itself passes.
    pub fn inclusive(bound: impl Into<f64>) -> Self {
        Self::build(bound.into(), true)
    }

    fn build(bound: f64, inclusive: bool) -> Self {
        let (err, not) = if inclusive {
            (
                format!("must be greater than or equal to {bound}"),
                format!("must not be greater than or equal to {bound}"),
            )
        } else {
            (
                format!("must be greater than {bound}"),
                format!("must not be greater than {bound}"),
            )
        };
        Self {
            bound,
            inclusive,
            err,
            not,
        }
    }
}

impl Predicate for GreaterThan {
    fn test(&self, value: &Value) -> bool {
        let Some(number) = value.as_f64() else {
            return false;
        };
        if self.inclusive {
            number >= self.bound
        } else {
            number > self.bound
        }
    }

    fn err_message(&self) -> &str {
        &self.err
    }

    fn not_message(&self) -> Option<&str> {
        Some(&self.not)
    }
}

/// An inclusive numeric interval.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::foundation::Predicate;
/// use vouch::predicates::range;
///
/// let check = range(1, 10);
/// assert!(check.test(&json!(1)));
/// assert!(check.test(&json!(10)));
/// assert!(!check.test(&json!(11)));
/// assert_eq!(check.err_message(), "must fall between 1 and 10");
/// ```
pub fn range(start: impl Into<f64>, end: impl Into<f64>) -> Range {
    Range::new(start, end)
}

/// A numeric interval excluding both endpoints.
pub fn exclusive_range(start: impl Into<f64>, end: impl Into<f64>) -> Range {
    Range::exclusive(start, end)
}

/// A strict numeric lower bound.
pub fn greater_than(bound: impl Into<f64>) -> GreaterThan {
    GreaterThan::new(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1), true)]
    #[case(json!(10), true)]
    #[case(json!(5.5), true)]
    #[case(json!(0), false)]
    #[case(json!(11), false)]
    #[case(json!("5"), false)]
    fn test_inclusive_range(#[case] value: Value, #[case] passes: bool) {
        assert_eq!(range(1, 10).test(&value), passes);
    }

    #[rstest]
    #[case(json!(1), false)]
    #[case(json!(10), false)]
    #[case(json!(2), true)]
    #[case(json!(9.99), true)]
    fn test_exclusive_range(#[case] value: Value, #[case] passes: bool) {
        assert_eq!(exclusive_range(1, 10).test(&value), passes);
    }

    #[test]
    fn test_range_messages_render_whole_floats_bare() {
        assert_eq!(range(0, 10).err_message(), "must fall between 0 and 10");
        assert_eq!(
            range(0.5, 9.5).not_message(),
            Some("must not fall between 0.5 and 9.5")
        );
    }

    #[rstest]
    #[case(json!(1), true)]
    #[case(json!(0), false)]
    #[case(json!(-1), false)]
    #[case(json!("1"), false)]
    fn test_greater_than_strict(#[case] value: Value, #[case] passes: bool) {
        assert_eq!(greater_than(0).test(&value), passes);
    }

    #[test]
    fn test_greater_than_inclusive_admits_bound() {
        let check = GreaterThan::inclusive(0);
        assert!(check.test(&json!(0)));
        assert!(!check.test(&json!(-1)));
        assert_eq!(check.err_message(), "must be greater than or equal to 0");
    }

    #[test]
    fn test_greater_than_messages() {
        let check = greater_than(0);
        assert_eq!(check.err_message(), "must be greater than 0");
        assert_eq!(check.not_message(), Some("must not be greater than 0"));
    }
}
