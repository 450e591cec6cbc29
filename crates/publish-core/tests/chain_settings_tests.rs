//! Tests for chain settings normalization

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use publish_core::{RawChainKey, RawChainSettings, normalize_chain_settings};
use rstest::rstest;
use serde_json::{Value, json};

#[test]
fn mixed_form_settings_normalize() {
    let raw = RawChainSettings::new()
        .with("default", json!({"shards": 1, "target": 1}))
        .with(1u64, json!({"shards": "5", "target": "10"}))
        .with("137", json!({"shards": "2", "targets": 3}));

    let normalized = normalize_chain_settings(&raw);

    assert_eq!(
        serde_json::to_string(&normalized).unwrap(),
        r#"{"default":{"shards":1,"target":1},"1":{"shards":5,"target":10},"137":{"shards":2,"targets":3}}"#
    );
}

#[rstest]
#[case(RawChainKey::from("default"), "default")]
#[case(RawChainKey::from(1u64), "1")]
#[case(RawChainKey::from("1"), "1")]
#[case(RawChainKey::from(" 42 "), "42")]
#[case(RawChainKey::from("137"), "137")]
fn keys_normalize_to_canonical_strings(#[case] key: RawChainKey, #[case] expected: &str) {
    assert_eq!(key.normalize(), expected);
}

#[rstest]
#[case(json!("7"), json!(7))]
#[case(json!("3.5"), json!(3.5))]
#[case(json!("4.0"), json!(4))]
#[case(json!(9), json!(9))]
#[case(json!("fast"), json!("fast"))]
#[case(json!(null), json!(null))]
#[case(json!([1, "2"]), json!([1, "2"]))]
fn field_values_coerce_when_numeric(#[case] input: Value, #[case] expected: Value) {
    let raw = RawChainSettings::new().with(1u64, json!({ "field": input }));
    let normalized = normalize_chain_settings(&raw);
    assert_eq!(normalized.get("1"), Some(&json!({ "field": expected })));
}

#[test]
fn unknown_fields_keep_their_position() {
    let raw = RawChainSettings::new().with(
        "default",
        json!({"target": "1", "experimental": "yes", "shards": "2"}),
    );
    let normalized = normalize_chain_settings(&raw);

    assert_eq!(
        serde_json::to_string(&normalized).unwrap(),
        r#"{"default":{"target":1,"experimental":"yes","shards":2}}"#
    );
}

#[test]
fn json_config_deserializes_in_source_order() {
    let raw: RawChainSettings = serde_json::from_str(
        r#"{"137": {"shards": "2"}, "default": {"shards": 1}, "1": {"shards": "5"}}"#,
    )
    .unwrap();

    let normalized = normalize_chain_settings(&raw);
    assert_eq!(normalized.keys().collect::<Vec<_>>(), ["137", "default", "1"]);
}

#[test]
fn yaml_integer_keys_are_accepted() {
    let raw: RawChainSettings =
        serde_yaml::from_str("default:\n  shards: 1\n1:\n  shards: '5'\n").unwrap();

    let keys: Vec<_> = raw.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(keys, vec![RawChainKey::from("default"), RawChainKey::from(1u64)]);
    assert_eq!(
        normalize_chain_settings(&raw).get("1"),
        Some(&json!({"shards": 5}))
    );
}

fn arb_key() -> impl Strategy<Value = RawChainKey> {
    prop_oneof![
        Just(RawChainKey::from("default")),
        (0u64..100_000).prop_map(RawChainKey::from),
        (0u64..100_000).prop_map(|id| RawChainKey::from(id.to_string())),
    ]
}

fn arb_field() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0i64..1_000).prop_map(|n| json!(n)),
        (0i64..1_000).prop_map(|n| json!(n.to_string())),
        "[a-z]{1,8}".prop_map(|s| json!(s)),
        any::<bool>().prop_map(|b| json!(b)),
    ]
}

fn arb_settings() -> impl Strategy<Value = RawChainSettings> {
    prop::collection::vec(
        (
            arb_key(),
            prop::collection::vec(("[a-z]{1,6}", arb_field()), 0..4),
        ),
        0..8,
    )
    .prop_map(|entries| {
        let mut raw = RawChainSettings::new();
        for (key, fields) in entries {
            let record: serde_json::Map<String, Value> = fields.into_iter().collect();
            raw.push(key, Value::Object(record));
        }
        raw
    })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in arb_settings()) {
        let once = normalize_chain_settings(&raw);
        let twice = normalize_chain_settings(&RawChainSettings::from(&once));
        prop_assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn normalization_keeps_first_seen_key_order(raw in arb_settings()) {
        let mut expected: Vec<String> = Vec::new();
        for (key, _) in raw.iter() {
            let normalized = key.normalize();
            if !expected.contains(&normalized) {
                expected.push(normalized);
            }
        }

        let normalized = normalize_chain_settings(&raw);
        let actual: Vec<String> = normalized.keys().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }
}
