use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use prefkit_store::ValueType;
use rustc_hash::FxHashMap as HashMap;

use crate::{PrefValue, PrefsError, Result, TypedEditor};

#[cfg(test)]
mod tests;

struct Entry {
	value_type: ValueType,
	editor: Arc<dyn Any + Send + Sync>,
}

/// Maps each key to the one editor created for it.
///
/// Share one registry (behind an `Arc`) between every facade over the same
/// store namespace; tests build a fresh registry each.
///
/// An editor stays bound to the facade that created it: a second facade
/// sharing the registry receives that same editor, and its writes stage into
/// the creating facade's session.
#[derive(Default)]
pub struct EditorRegistry {
	entries: Mutex<HashMap<Box<str>, Entry>>,
}

impl EditorRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the editor for `key`, building it with `factory` on first use.
	///
	/// Lookup and creation happen under one lock, so racing callers all
	/// receive the same instance. Fails with [`PrefsError::TypeConflict`] if
	/// `key` was first handed out as another type.
	pub fn get_or_create<T, F>(&self, key: &str, factory: F) -> Result<Arc<TypedEditor<T>>>
	where
		T: PrefValue,
		F: FnOnce() -> TypedEditor<T>,
	{
		if key.is_empty() {
			return Err(PrefsError::EmptyKey);
		}

		let mut entries = self.entries.lock();
		if let Some(entry) = entries.get(key) {
			let conflict = || PrefsError::TypeConflict {
				key: key.to_string(),
				registered: entry.value_type,
				requested: T::VALUE_TYPE,
			};
			if entry.value_type != T::VALUE_TYPE {
				return Err(conflict());
			}
			return Arc::clone(&entry.editor)
				.downcast::<TypedEditor<T>>()
				.map_err(|_| conflict());
		}

		let editor = Arc::new(factory());
		entries.insert(
			Box::from(key),
			Entry {
				value_type: T::VALUE_TYPE,
				editor: editor.clone(),
			},
		);
		tracing::debug!(key, value_type = %T::VALUE_TYPE, "prefs.registry.created");
		Ok(editor)
	}

	/// Returns the type `key` was first handed out as.
	pub fn value_type(&self, key: &str) -> Option<ValueType> {
		self.entries.lock().get(key).map(|entry| entry.value_type)
	}

	/// Returns every registered key, sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.entries.lock().keys().map(|k| k.to_string()).collect();
		keys.sort_unstable();
		keys
	}

	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}
}

impl std::fmt::Debug for EditorRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EditorRegistry")
			.field("keys", &self.keys())
			.finish()
	}
}
