//! Property-based checks over the evaluator's structural guarantees.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use vouch::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_mapping() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,6}", arb_value(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn empty_schema_accepts_any_mapping(data in arb_mapping()) {
        prop_assert!(validate(&Schema::new(), &data).is_valid());
    }

    #[test]
    fn double_negation_matches_the_original(value in arb_value()) {
        let plain = truthy();
        let double = not(not(truthy()));
        prop_assert_eq!(plain.test(&value), double.test(&value));
        prop_assert_eq!(double.err_message(), plain.err_message());
    }

    #[test]
    fn absent_optional_field_never_affects_the_report(data in arb_mapping()) {
        let mut data = data;
        data.remove("ghost");
        let rules = schema! {
            "ghost" => [truthy(), equals(1)],
        };
        let report = validate(&rules, &data);
        prop_assert!(report.is_valid());
        prop_assert!(report.field("ghost").is_none());
    }

    #[test]
    fn absent_required_field_reports_exactly_must_be_present(data in arb_mapping()) {
        let mut data = data;
        data.remove("ghost");
        let rules = schema! {
            "ghost" => [Required, truthy()],
        };
        let report = validate(&rules, &data);
        prop_assert!(report.field("ghost").unwrap().is_missing());
        let serialized = serde_json::to_value(&report).unwrap();
        prop_assert_eq!(&serialized["ghost"], &json!("must be present"));
    }

    #[test]
    fn validity_equals_empty_error_map(n in any::<i64>()) {
        let rules = schema! {
            "n" => [Required, greater_than(0)],
        };
        let mut data = Map::new();
        data.insert("n".to_owned(), json!(n));
        let report = validate(&rules, &data);
        prop_assert_eq!(report.is_valid(), report.errors().is_empty());
        prop_assert_eq!(report.is_valid(), n > 0);
    }
}
