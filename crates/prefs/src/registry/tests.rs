use std::sync::Arc;

use prefkit_store::{MemoryStore, ValueType};

use crate::{EditorRegistry, Preferences, PrefsError};

fn facade() -> Preferences {
	Preferences::new(Arc::new(MemoryStore::new()), Arc::new(EditorRegistry::new()))
}

/// Requests `key` as the given type, returning only the outcome.
fn request(prefs: &Preferences, key: &str, ty: ValueType) -> Result<(), PrefsError> {
	match ty {
		ValueType::String => prefs.string_editor(key).map(drop),
		ValueType::Boolean => prefs.bool_editor(key).map(drop),
		ValueType::Integer => prefs.int_editor(key).map(drop),
		ValueType::Long => prefs.long_editor(key).map(drop),
		ValueType::Float => prefs.float_editor(key).map(drop),
		ValueType::Double => prefs.double_editor(key).map(drop),
	}
}

#[test]
fn repeated_request_returns_same_instance() {
	let prefs = facade();
	let first = prefs.string_editor("name").unwrap();
	let second = prefs.string_editor("name").unwrap();
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(prefs.registry().len(), 1);
}

#[test]
fn every_type_pair_conflicts() {
	for registered in ValueType::ALL {
		for requested in ValueType::ALL {
			if registered == requested {
				continue;
			}
			let prefs = facade();
			request(&prefs, "k", registered).unwrap();
			let err = request(&prefs, "k", requested).unwrap_err();
			assert_eq!(
				err,
				PrefsError::TypeConflict {
					key: "k".into(),
					registered,
					requested,
				}
			);
		}
	}
}

#[test]
fn conflict_keeps_first_editor() {
	let prefs = facade();
	let count = prefs.int_editor("count").unwrap();
	assert!(prefs.long_editor("count").is_err());
	assert_eq!(prefs.registry().value_type("count"), Some(ValueType::Integer));
	assert!(Arc::ptr_eq(&count, &prefs.int_editor("count").unwrap()));
}

#[test]
fn conflict_message_names_key_and_types() {
	let prefs = facade();
	prefs.bool_editor("flag").unwrap();
	let err = prefs.string_editor("flag").unwrap_err();
	assert_eq!(
		err.to_string(),
		"key 'flag' is already used as boolean, requested as string"
	);
}

#[test]
fn empty_key_is_rejected() {
	let prefs = facade();
	assert_eq!(prefs.string_editor("").unwrap_err(), PrefsError::EmptyKey);
	assert!(prefs.registry().is_empty());
}

#[test]
fn registry_is_shared_between_facades() {
	let registry = Arc::new(EditorRegistry::new());
	let a = Preferences::new(Arc::new(MemoryStore::new()), Arc::clone(&registry));
	let b = Preferences::new(Arc::new(MemoryStore::new()), Arc::clone(&registry));

	let from_a = a.double_editor("precise").unwrap();
	let from_b = b.double_editor("precise").unwrap();
	assert!(Arc::ptr_eq(&from_a, &from_b));
	assert!(b.float_editor("precise").is_err());
}

#[test]
fn keys_are_sorted() {
	let prefs = facade();
	prefs.int_editor("count").unwrap();
	prefs.bool_editor("flag").unwrap();
	prefs.string_editor("name").unwrap();
	assert_eq!(prefs.registry().keys(), vec!["count", "flag", "name"]);
	assert_eq!(prefs.registry().value_type("missing"), None);
}
