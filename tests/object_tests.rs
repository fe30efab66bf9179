#![cfg(feature = "object")]
//! Integration tests for `extend` and `defaults`.

use rstest::rstest;
use sequent::object::{defaults, extend};
use sequent::value::Value;
use std::collections::{BTreeMap, HashMap};

fn record(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn extend_overwrites_existing_keys() {
    let mut target = record(&[("a", Value::from(1))]);
    let source = record(&[("a", Value::from(2)), ("b", Value::from(3))]);

    extend(&mut target, [&source]);

    assert_eq!(
        target,
        record(&[("a", Value::from(2)), ("b", Value::from(3))])
    );
}

#[rstest]
fn extend_applies_sources_left_to_right() {
    let mut target: HashMap<&str, &str> = HashMap::new();
    let first = HashMap::from([("colour", "red"), ("size", "small")]);
    let second = HashMap::from([("colour", "blue")]);

    extend(&mut target, [&first, &second]);

    assert_eq!(target.get("colour"), Some(&"blue"));
    assert_eq!(target.get("size"), Some(&"small"));
}

#[rstest]
fn extend_leaves_sources_untouched() {
    let mut target = record(&[]);
    let source = record(&[("k", Value::array([1, 2]))]);
    let snapshot = source.clone();

    extend(&mut target, [&source]);
    if let Some(Value::Array(elements)) = target.get_mut("k") {
        elements.push(Value::from(3));
    }

    assert_eq!(source, snapshot);
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
fn defaults_fills_only_missing_keys() {
    let mut target = record(&[("a", Value::from(1))]);
    let source = record(&[("a", Value::from(2)), ("b", Value::from(3))]);

    defaults(&mut target, [&source]);

    assert_eq!(
        target,
        record(&[("a", Value::from(1)), ("b", Value::from(3))])
    );
}

#[rstest]
fn defaults_keeps_present_null_and_undefined() {
    let mut target = record(&[("a", Value::Null), ("b", Value::Undefined)]);
    let source = record(&[("a", Value::from(1)), ("b", Value::from(2))]);

    defaults(&mut target, [&source]);

    assert_eq!(target.get("a"), Some(&Value::Null));
    assert_eq!(target.get("b"), Some(&Value::Undefined));
}

#[rstest]
#[case(vec![("x", 1)], vec![("x", 2)], 1)]
#[case(vec![], vec![("x", 2)], 2)]
#[case(vec![], vec![("y", 2), ("x", 5)], 5)]
fn defaults_first_write_sticks(
    #[case] target_entries: Vec<(&str, i32)>,
    #[case] source_entries: Vec<(&str, i32)>,
    #[case] expected: i32,
) {
    let mut target: BTreeMap<&str, i32> = target_entries.into_iter().collect();
    let source: BTreeMap<&str, i32> = source_entries.into_iter().collect();
    let later = BTreeMap::from([("x", 100)]);

    defaults(&mut target, [&source, &later]);

    assert_eq!(target.get("x"), Some(&expected));
}

#[rstest]
fn merges_return_the_target() {
    let mut target = record(&[]);
    let source = record(&[("a", Value::from(1))]);

    let returned = defaults(&mut target, [&source]);
    returned.insert("b".to_string(), Value::from(2));

    assert_eq!(target.len(), 2);
}
