use pretty_assertions::assert_eq;

use super::MemoryStore;
use crate::{PreferenceStore, StoreValue};

#[test]
fn reads_fall_back_to_default() {
	let store = MemoryStore::new();
	assert_eq!(store.read_string("name", "fallback".into()), "fallback");
	assert_eq!(store.read_int("count", -1), -1);
	assert!(!store.contains("name"));
}

#[test]
fn mismatched_type_reads_return_default() {
	let store = MemoryStore::from_entries([("count", StoreValue::Integer(42))]);
	assert_eq!(store.read_long("count", 7), 7);
	assert_eq!(store.read_string("count", String::new()), "");
	assert_eq!(store.read_int("count", 0), 42);
}

#[test]
fn staged_edits_are_invisible_until_commit() {
	let store = MemoryStore::new();
	let mut editor = store.edit();
	editor.put_string("name", "abc".into());
	editor.put_bool("flag", true);
	assert!(store.is_empty());

	assert!(editor.commit());
	assert_eq!(store.read_string("name", String::new()), "abc");
	assert!(store.read_bool("flag", false));
	assert_eq!(store.keys(), vec!["flag".to_string(), "name".to_string()]);
}

#[test]
fn apply_lands_synchronously() {
	let store = MemoryStore::new();
	let mut editor = store.edit();
	editor.put_double("precise", -0.25);
	editor.apply().expect("memory store supports apply");
	assert_eq!(store.read_double("precise", 0.0), -0.25);
}

#[test]
fn committed_editor_can_be_reused() {
	let store = MemoryStore::new();
	let mut editor = store.edit();
	editor.put_long("total", i64::MAX);
	assert!(editor.commit());

	editor.remove("total");
	assert_eq!(store.read_long("total", 0), i64::MAX);
	assert!(editor.commit());
	assert!(!store.contains("total"));
}

#[test]
fn clones_share_entries() {
	let store = MemoryStore::new();
	let other = store.clone();
	let mut editor = store.edit();
	editor.put_float("ratio", 1.5);
	editor.commit();
	assert_eq!(other.read_float("ratio", 0.0), 1.5);
}

#[test]
fn clear_then_commit_empties_store() {
	let store = MemoryStore::from_entries([
		("name", StoreValue::from("abc")),
		("flag", StoreValue::Boolean(true)),
	]);
	let mut editor = store.edit();
	editor.clear();
	assert!(editor.commit());
	assert!(store.is_empty());
}
