use super::*;
use crate::{ConfigSet, KeyValue, KeyedVariantList, TypeTag, VariantError, VariantValue};
use pretty_assertions::assert_eq;
use serde_json::json;

fn abc() -> KeyedVariantList<u32> {
	[("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
}

fn keys<V>(list: &KeyedVariantList<V>) -> Vec<&str> {
	list.keys().collect()
}

#[test]
fn upsert_should_append_new_keys_in_insertion_order() {
	let list = abc();

	assert_eq!(keys(&list), vec!["a", "b", "c"]);
	assert_eq!(list.find_pos("b"), Some(1));
	assert_eq!(list.find("c"), Some(&3));
	assert_eq!(list.find("d"), None);
}

#[test]
fn upsert_should_replace_in_place() {
	let mut list = abc();

	assert_eq!(list.upsert("a", 10), Some(1));

	assert_eq!(keys(&list), vec!["a", "b", "c"]);
	assert_eq!(list.find("a"), Some(&10));
}

#[test]
fn upsert_should_be_idempotent() {
	let mut list = abc();

	list.upsert("d", 4);
	list.upsert("d", 4);

	assert_eq!(list.len(), 4);
	assert_eq!(list.keys().filter(|k| *k == "d").count(), 1);
}

#[test]
fn remove_should_move_last_entry_into_freed_slot() {
	let mut list = abc();

	assert_eq!(list.remove("a"), Some(1));

	assert_eq!(keys(&list), vec!["c", "b"]);
	assert_eq!(list.remove("a"), None);
}

#[test]
fn remove_of_last_entry_should_keep_order() {
	let mut list = abc();

	assert_eq!(list.remove("c"), Some(3));

	assert_eq!(keys(&list), vec!["a", "b"]);
}

#[test]
fn find_mut_should_update_value() {
	let mut list = abc();

	*list.find_mut("b").unwrap() += 40;

	assert_eq!(list.find("b"), Some(&42));
	assert_eq!(list.entry_at(1), Some(("b", &42)));
	assert!(list.find_mut("x").is_none());
}

#[test]
fn try_from_entries_should_reject_duplicate_keys() {
	let entries = vec![
		KeyValue { key: "a".into(), value: 1 },
		KeyValue { key: "a".into(), value: 2 },
	];

	assert_eq!(
		KeyedVariantList::try_from_entries(entries),
		Err(VariantError::DuplicateKey("a".into()))
	);
}

#[test]
fn binary_decoding_should_reject_duplicate_keys() {
	let entries = vec![
		KeyValue { key: "a".to_string(), value: 1u32 },
		KeyValue { key: "a".to_string(), value: 2u32 },
	];
	let bytes = codec::Encode::encode(&entries);

	assert!(KeyedVariantList::<u32>::decode_binary(&bytes).is_err());
}

#[test]
fn binary_encoding_should_match_entry_vector() {
	let list = abc();
	let bytes = codec::Encode::encode(&list);

	assert_eq!(KeyedVariantList::<u32>::decode_binary(&bytes).unwrap(), list);
	assert_eq!(bytes, codec::Encode::encode(&list.entries().to_vec()));
}

#[test]
fn text_decoding_should_reject_duplicate_keys() {
	let text = r#"[{"key":"a","value":1},{"key":"a","value":2}]"#;

	assert!(serde_json::from_str::<KeyedVariantList<u32>>(text).is_err());
}

#[test]
fn text_encoding_should_keep_order() {
	let mut list: KeyedVariantList<VariantValue> = KeyedVariantList::new();
	list.upsert("z", VariantValue::from_uint32(1));
	list.upsert("a", VariantValue::from_name(name("alice")));

	assert_eq!(
		serde_json::to_value(&list).unwrap(),
		json!([
			{"key": "z", "value": {"type": "uint32", "value": 1}},
			{"key": "a", "value": {"type": "name", "value": "alice"}},
		])
	);
}

#[test]
fn to_map_should_strip_discriminants() {
	let mut list: KeyedVariantList<VariantValue> = KeyedVariantList::new();
	list.upsert("prize", VariantValue::from_asset(eos(10_000)));
	list.upsert("count", VariantValue::from_uint32(3));
	list.upsert("none", VariantValue::from_unit());

	let map = list.to_map();

	assert_eq!(map.len(), 3);
	assert_eq!(map["prize"], json!("1.0000 EOS"));
	assert_eq!(map["count"], json!(3));
	assert_eq!(map["none"], json!(null));
}

#[test]
fn into_iter_should_yield_owned_pairs() {
	let pairs: Vec<(String, u32)> = abc().into_iter().collect();

	assert_eq!(
		pairs,
		vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
	);
}

#[test]
fn config_set_should_read_typed_values() {
	let mut config = ConfigSet::new();
	config.set("release_interval_hours", 24u32);
	config.set("prize", eos(10_000));
	config.set("winner", "alice");

	assert_eq!(config.get_uint32("release_interval_hours"), Ok(Some(24)));
	assert_eq!(config.get_asset("prize"), Ok(Some(eos(10_000))));
	assert_eq!(config.get_name("winner"), Ok(Some(name("alice"))));
	assert_eq!(config.get_text("winner"), Ok(Some("alice".to_string())));
	assert_eq!(config.get_uint64("missing"), Ok(None));
}

#[test]
fn config_set_should_fail_when_value_has_other_kind() {
	let mut config = ConfigSet::new();
	config.set("release_interval_hours", 24u64);

	assert_eq!(
		config.get_uint32("release_interval_hours"),
		Err(VariantError::TypeMismatch {
			found: TypeTag::UInt64,
			expected: TypeTag::UInt32,
		})
	);
}

#[test]
fn require_should_fail_when_key_is_missing() {
	let config = ConfigSet::new();

	assert_eq!(
		config.require::<u32>("release_percent_x100000"),
		Err(VariantError::MissingKey("release_percent_x100000".into()))
	);
}

#[test]
fn set_should_return_replaced_value() {
	let mut config = ConfigSet::new();

	assert_eq!(config.set("cycles", 1u32), None);
	assert_eq!(config.set("cycles", 2u32), Some(VariantValue::from_uint32(1)));
	assert_eq!(config.len(), 1);
}
