use std::collections::BTreeMap;

use crate::StoreValue;


/// Changes staged by one edit session.
///
/// The last change staged for a key wins. A staged clear is applied before
/// every other change of the same session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingEdits {
	cleared: bool,
	/// `None` stages a removal.
	changes: BTreeMap<String, Option<StoreValue>>,
}

impl PendingEdits {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn put(&mut self, key: &str, value: StoreValue) {
		self.changes.insert(key.to_string(), Some(value));
	}

	pub fn remove(&mut self, key: &str) {
		self.changes.insert(key.to_string(), None);
	}

	pub fn clear(&mut self) {
		self.cleared = true;
	}

	/// Returns true if nothing has been staged.
	pub fn is_empty(&self) -> bool {
		!self.cleared && self.changes.is_empty()
	}

	/// Returns true if a clear has been staged.
	pub fn is_cleared(&self) -> bool {
		self.cleared
	}

	/// Number of keys with a staged put or removal.
	pub fn len(&self) -> usize {
		self.changes.len()
	}

	/// Returns the first key staged with a NaN or infinite float.
	pub fn non_finite_key(&self) -> Option<&str> {
		self.changes
			.iter()
			.find(|(_, change)| change.as_ref().is_some_and(|v| !v.is_finite()))
			.map(|(key, _)| key.as_str())
	}

	/// Applies the staged changes to `entries`.
	///
	/// Returns true if `entries` changed.
	pub fn apply_to(&self, entries: &mut BTreeMap<String, StoreValue>) -> bool {
		let mut changed = false;
		if self.cleared && !entries.is_empty() {
			entries.clear();
			changed = true;
		}
		for (key, change) in &self.changes {
			match change {
				Some(value) => {
					if entries.get(key) != Some(value) {
						entries.insert(key.clone(), value.clone());
						changed = true;
					}
				}
				None => {
					changed |= entries.remove(key).is_some();
				}
			}
		}
		changed
	}

	/// Empties the staged change set, returning what was staged.
	pub fn take(&mut self) -> PendingEdits {
		std::mem::take(self)
	}
}
