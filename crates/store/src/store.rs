use crate::{Result, StoreError, StoreValue};

/// A durable key to value dictionary.
///
/// Implementations guarantee their own read consistency: readers never need
/// an external lock, and a reader that runs concurrently with a commit sees
/// either the old or the new value for every key.
pub trait PreferenceStore: Send + Sync {
	/// Returns the value stored under `key`, if any.
	fn read(&self, key: &str) -> Option<StoreValue>;

	/// Returns every key currently stored, sorted.
	fn keys(&self) -> Vec<String>;

	/// Opens a new edit session.
	///
	/// Edits staged on the returned editor are invisible to readers until
	/// [`StoreEditor::commit`] or [`StoreEditor::apply`] is called.
	fn edit(&self) -> Box<dyn StoreEditor>;

	/// Returns true if any value is stored under `key`.
	fn contains(&self, key: &str) -> bool {
		self.read(key).is_some()
	}

	fn read_string(&self, key: &str, default: String) -> String {
		match self.read(key) {
			Some(StoreValue::String(v)) => v,
			_ => default,
		}
	}

	fn read_bool(&self, key: &str, default: bool) -> bool {
		match self.read(key) {
			Some(StoreValue::Boolean(v)) => v,
			_ => default,
		}
	}

	fn read_int(&self, key: &str, default: i32) -> i32 {
		match self.read(key) {
			Some(StoreValue::Integer(v)) => v,
			_ => default,
		}
	}

	fn read_long(&self, key: &str, default: i64) -> i64 {
		match self.read(key) {
			Some(StoreValue::Long(v)) => v,
			_ => default,
		}
	}

	fn read_float(&self, key: &str, default: f32) -> f32 {
		match self.read(key) {
			Some(StoreValue::Float(v)) => v,
			_ => default,
		}
	}

	fn read_double(&self, key: &str, default: f64) -> f64 {
		match self.read(key) {
			Some(StoreValue::Double(v)) => v,
			_ => default,
		}
	}
}

/// A mutable edit session over a [`PreferenceStore`].
///
/// Staged changes follow the store's clear-first rule: a staged
/// [`clear`](StoreEditor::clear) empties the store before the session's puts
/// and removals land, whatever order they were staged in.
pub trait StoreEditor: Send {
	/// Stages `value` under `key`.
	fn put(&mut self, key: &str, value: StoreValue);

	/// Stages removal of `key`.
	fn remove(&mut self, key: &str);

	/// Stages removal of every key.
	fn clear(&mut self);

	/// Writes the staged changes synchronously and durably.
	///
	/// Returns false if the durable write failed.
	fn commit(&mut self) -> bool;

	/// Hands the staged changes to the store without waiting for durability.
	///
	/// Stores without an asynchronous write path keep this default, which
	/// reports [`StoreError::ApplyUnsupported`] and leaves the staged changes
	/// in place so the caller can [`commit`](StoreEditor::commit) instead.
	fn apply(&mut self) -> Result<()> {
		Err(StoreError::ApplyUnsupported)
	}

	fn put_string(&mut self, key: &str, value: String) {
		self.put(key, StoreValue::String(value));
	}

	fn put_bool(&mut self, key: &str, value: bool) {
		self.put(key, StoreValue::Boolean(value));
	}

	fn put_int(&mut self, key: &str, value: i32) {
		self.put(key, StoreValue::Integer(value));
	}

	fn put_long(&mut self, key: &str, value: i64) {
		self.put(key, StoreValue::Long(value));
	}

	fn put_float(&mut self, key: &str, value: f32) {
		self.put(key, StoreValue::Float(value));
	}

	fn put_double(&mut self, key: &str, value: f64) {
		self.put(key, StoreValue::Double(value));
	}
}
