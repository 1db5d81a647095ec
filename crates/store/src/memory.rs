//! Process-local preference store.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{PendingEdits, PreferenceStore, Result, StoreEditor, StoreValue};

#[cfg(test)]
mod tests;

type Entries = Arc<RwLock<BTreeMap<String, StoreValue>>>;

/// In-memory store. Clones share the same entries.
///
/// Both [`StoreEditor::commit`] and [`StoreEditor::apply`] land synchronously;
/// commits never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: Entries,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store seeded with `entries`.
	pub fn from_entries<K, I>(entries: I) -> Self
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, StoreValue)>,
	{
		let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
		Self {
			entries: Arc::new(RwLock::new(map)),
		}
	}

	/// Returns a copy of every stored entry.
	pub fn snapshot(&self) -> BTreeMap<String, StoreValue> {
		self.entries.read().clone()
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

impl PreferenceStore for MemoryStore {
	fn read(&self, key: &str) -> Option<StoreValue> {
		self.entries.read().get(key).cloned()
	}

	fn keys(&self) -> Vec<String> {
		self.entries.read().keys().cloned().collect()
	}

	fn edit(&self) -> Box<dyn StoreEditor> {
		Box::new(MemoryEditor {
			entries: Arc::clone(&self.entries),
			edits: PendingEdits::new(),
		})
	}

	fn contains(&self, key: &str) -> bool {
		self.entries.read().contains_key(key)
	}
}

struct MemoryEditor {
	entries: Entries,
	edits: PendingEdits,
}

impl MemoryEditor {
	fn flush(&mut self) {
		let edits = self.edits.take();
		let mut entries = self.entries.write();
		if edits.apply_to(&mut entries) {
			tracing::trace!(staged = edits.len(), cleared = edits.is_cleared(), "prefs.memory.flush");
		}
	}
}

impl StoreEditor for MemoryEditor {
	fn put(&mut self, key: &str, value: StoreValue) {
		self.edits.put(key, value);
	}

	fn remove(&mut self, key: &str) {
		self.edits.remove(key);
	}

	fn clear(&mut self) {
		self.edits.clear();
	}

	fn commit(&mut self) -> bool {
		self.flush();
		true
	}

	fn apply(&mut self) -> Result<()> {
		self.flush();
		Ok(())
	}
}
