use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use prefkit_store::{PreferenceStore, StoreEditor, ValueType};

use crate::PrefValue;
use crate::facade::{Preferences, Session};

/// Typed read/write handle for exactly one key.
///
/// Obtained from a [`Preferences`] facade; the registry hands out the same
/// instance for every later request of the same key.
pub struct TypedEditor<T: PrefValue> {
	key: Arc<str>,
	store: Arc<dyn PreferenceStore>,
	session: Weak<Session>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: PrefValue> TypedEditor<T> {
	pub(crate) fn new(prefs: &Preferences, key: &str) -> Self {
		Self {
			key: Arc::from(key),
			store: Arc::clone(prefs.store()),
			session: prefs.session_handle(),
			_marker: PhantomData,
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value_type(&self) -> ValueType {
		T::VALUE_TYPE
	}

	/// Reads the stored value, or `default` if the key is absent or holds another type.
	///
	/// Reads never consult the pending session: staged writes become visible
	/// only after they are committed or applied.
	pub fn get(&self, default: T) -> T {
		self.store
			.read(&self.key)
			.and_then(T::from_store)
			.unwrap_or(default)
	}

	/// Returns true if the store holds a value of this editor's type.
	pub fn contains(&self) -> bool {
		self.store
			.read(&self.key)
			.is_some_and(|v| v.matches_type(T::VALUE_TYPE))
	}

	/// Stages `value` in the owning facade's session.
	pub fn set(&self, value: T) -> &Self {
		self.stage(|session| session.put(&self.key, value.into_store()));
		self
	}

	/// Stages removal of the key in the owning facade's session.
	pub fn remove(&self) -> &Self {
		self.stage(|session| session.remove(&self.key));
		self
	}

	fn stage(&self, op: impl FnOnce(&mut dyn StoreEditor)) {
		match self.session.upgrade() {
			Some(session) => session.stage(op),
			None => tracing::warn!(key = %self.key, "prefs.editor.orphaned_write"),
		}
	}
}

impl<T: PrefValue> std::fmt::Debug for TypedEditor<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypedEditor")
			.field("key", &self.key)
			.field("value_type", &T::VALUE_TYPE)
			.finish_non_exhaustive()
	}
}
