//! Declaration macros for schema construction.

/// Builds a [`Schema`](crate::schema::Schema) from `field => [rules]`
/// pairs.
///
/// Each rule position accepts anything implementing
/// [`IntoRule`](crate::schema::IntoRule): predicates,
/// [`Required`](crate::schema::Required), combinators, or a nested
/// `schema!` block.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let rules = schema! {
///     "foo" => [Required, truthy()],
///     "bar" => [schema! {
///         "baz" => [Required],
///     }],
/// };
///
/// let data = json!({ "foo": 1, "bar": { "baz": "ok" } });
/// assert!(validate(&rules, data.as_object().unwrap()).is_valid());
/// ```
#[macro_export]
macro_rules! schema {
    ( $( $field:expr => [ $( $rule:expr ),* $(,)? ] ),* $(,)? ) => {
        $crate::schema::Schema::new()
            $(
                .field(
                    $field,
                    vec![ $( $crate::schema::IntoRule::into_rule($rule) ),* ],
                )
            )*
    };
}

/// Builds an [`Each`](crate::combinators::Each) rule.
///
/// Two forms mirroring the two modes: `each!([pred, ...])` applies
/// every predicate to every element, and `each!({ field => [rules] })`
/// validates each element against a sub-schema.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let rules = schema! {
///     "scores" => [each!([range(0, 100)])],
///     "players" => [each!({ "name" => [Required] })],
/// };
///
/// let data = json!({
///     "scores": [80, 95],
///     "players": [{ "name": "ada" }],
/// });
/// assert!(validate(&rules, data.as_object().unwrap()).is_valid());
/// ```
#[macro_export]
macro_rules! each {
    ( [ $( $predicate:expr ),* $(,)? ] ) => {
        $crate::combinators::Each::list(vec![
            $( Box::new($predicate) as Box<dyn $crate::foundation::Predicate> ),*
        ])
    };
    ( { $( $body:tt )* } ) => {
        $crate::combinators::Each::schema($crate::schema! { $( $body )* })
    };
}

#[cfg(test)]
mod tests {
    use crate::predicates::{equals, range};
    use crate::schema::Rule;
    use serde_json::json;

    #[test]
    fn test_schema_macro_builds_fields_in_order() {
        let rules = schema! {
            "foo" => [crate::schema::Required, equals(1)],
            "bar" => [range(0, 10)],
        };
        assert_eq!(rules.len(), 2);
        assert!(matches!(rules.fields()[0].1[0], Rule::Required));
    }

    #[test]
    fn test_schema_macro_accepts_trailing_commas() {
        let rules = schema! {
            "foo" => [equals(1),],
        };
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_each_macro_list_form() {
        let rules = schema! {
            "foo" => [each!([range(0, 10)])],
        };
        let data = json!({ "foo": [11] });
        let report = rules.validate(data.as_object().unwrap());
        assert_eq!(
            report.field("foo").unwrap().entries()[0].as_message(),
            Some("all values must fall between 0 and 10")
        );
    }

    #[test]
    fn test_each_macro_schema_form() {
        let rules = schema! {
            "foo" => [each!({ "qux" => [crate::schema::Required] })],
        };
        let data = json!({ "foo": [{}, { "qux": 1 }] });
        let report = rules.validate(data.as_object().unwrap());
        let items = report.field("foo").unwrap().entries()[0].as_items().unwrap();
        assert!(items[&0]["qux"].is_missing());
        assert!(!items.contains_key(&1));
    }

    #[test]
    fn test_nested_schema_macro() {
        let rules = schema! {
            "outer" => [schema! { "inner" => [crate::schema::Required] }],
        };
        let data = json!({ "outer": {} });
        let report = rules.validate(data.as_object().unwrap());
        let group = report.field("outer").unwrap().entries()[0].as_group().unwrap();
        assert!(group["inner"].is_missing());
    }
}
