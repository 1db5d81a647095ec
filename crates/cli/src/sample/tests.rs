use std::sync::Arc;

use prefkit::{EditorRegistry, MemoryStore, PreferenceSet, StoreValue};

use super::{SamplePrefs, read, remove, stage};
use crate::cli::Field;

fn sample(store: &MemoryStore) -> SamplePrefs {
	SamplePrefs::new(Arc::new(store.clone()), Arc::new(EditorRegistry::new()))
}

#[test]
fn keys_match_fields() {
	let fields: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
	assert_eq!(SamplePrefs::KEYS, fields.as_slice());
}

#[test]
fn stage_parses_per_field_type() {
	let store = MemoryStore::new();
	let prefs = sample(&store);
	stage(&prefs, Field::Name, "").unwrap();
	stage(&prefs, Field::Flag, "false").unwrap();
	stage(&prefs, Field::Count, "2147483647").unwrap();
	stage(&prefs, Field::Total, "-9223372036854775808").unwrap();
	stage(&prefs, Field::Ratio, "-1.5").unwrap();
	stage(&prefs, Field::Precise, "0").unwrap();
	assert!(store.is_empty());
	assert!(prefs.commit());

	let snapshot = store.snapshot();
	assert_eq!(snapshot["name"], StoreValue::String(String::new()));
	assert_eq!(snapshot["flag"], StoreValue::Boolean(false));
	assert_eq!(snapshot["count"], StoreValue::Integer(i32::MAX));
	assert_eq!(snapshot["total"], StoreValue::Long(i64::MIN));
	assert_eq!(snapshot["ratio"], StoreValue::Float(-1.5));
	assert_eq!(snapshot["precise"], StoreValue::Double(0.0));
}

#[test]
fn stage_rejects_out_of_range_values() {
	let prefs = sample(&MemoryStore::new());
	assert!(stage(&prefs, Field::Count, "2147483648").is_err());
	assert!(stage(&prefs, Field::Flag, "yes").is_err());
	assert!(stage(&prefs, Field::Ratio, "-inf").is_err());
}

#[test]
fn read_marks_missing_and_foreign_values() {
	let store = MemoryStore::from_entries([
		("count", StoreValue::Integer(42)),
		("total", StoreValue::from("not a number")),
	]);
	let prefs = sample(&store);
	assert_eq!(read(&prefs, Field::Count).unwrap(), "42");
	assert_eq!(read(&prefs, Field::Total).unwrap(), "<unset>");
	assert_eq!(read(&prefs, Field::Name).unwrap(), "<unset>");
}

#[test]
fn remove_stages_until_commit() {
	let store = MemoryStore::from_entries([("flag", StoreValue::Boolean(true))]);
	let prefs = sample(&store);
	remove(&prefs, Field::Flag).unwrap();
	assert_eq!(read(&prefs, Field::Flag).unwrap(), "true");
	assert!(prefs.commit());
	assert_eq!(read(&prefs, Field::Flag).unwrap(), "<unset>");
}
