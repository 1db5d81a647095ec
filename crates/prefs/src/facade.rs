//! Pending-edit session lifecycle and editor provisioning.
//!
//! A facade holds at most one pending session at a time:
//!
//! - `Empty -> Staging` on the first `set`, `remove` or `clear`
//! - `Staging -> Empty` on `apply` (best-effort write, falling back to commit),
//!   `commit` (durable write) or `discard` (no write)
//! - `apply`, `commit` and `discard` on `Empty` do nothing (`commit` returns false)
//!
//! Flushes of one facade run one at a time, in the order their sessions were
//! detached. Staging never waits on a flush.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use prefkit_store::{PreferenceStore, StoreEditor};

use crate::{EditorRegistry, PrefValue, Result, TypedEditor};


/// The per-facade session slot. Editors hold it weakly.
pub(crate) struct Session {
	store: Arc<dyn PreferenceStore>,
	pending: Mutex<Option<Box<dyn StoreEditor>>>,
}

impl Session {
	/// Runs `op` against the pending session, opening one if none exists.
	pub(crate) fn stage(&self, op: impl FnOnce(&mut dyn StoreEditor)) {
		let mut pending = self.pending.lock();
		let editor = pending.get_or_insert_with(|| {
			tracing::trace!("prefs.session.open");
			self.store.edit()
		});
		op(&mut **editor);
	}

	/// Detaches the pending session. Writes staged afterwards open a new one.
	fn take(&self) -> Option<Box<dyn StoreEditor>> {
		self.pending.lock().take()
	}

	fn is_pending(&self) -> bool {
		self.pending.lock().is_some()
	}
}

/// Typed access to one store through a single pending-edit session.
///
/// Concrete preference sets wrap a facade and expose named editors, usually
/// through [`preferences!`](crate::preferences) and the [`PreferenceSet`]
/// trait.
pub struct Preferences {
	store: Arc<dyn PreferenceStore>,
	registry: Arc<EditorRegistry>,
	session: Arc<Session>,
	/// Held from detaching a session until the store has written it.
	flush: Mutex<()>,
}

impl Preferences {
	/// Creates a facade over `store`, drawing editors from `registry`.
	///
	/// Editors stay bound to the facade that first created them. Once that
	/// facade is dropped, a new facade over the same registry hands back the
	/// same editors, whose writes are then dropped with a warning, so its
	/// `commit` returns false. Give each live facade its own registry, or keep
	/// the first facade alive for as long as its keys are written.
	pub fn new(store: Arc<dyn PreferenceStore>, registry: Arc<EditorRegistry>) -> Self {
		let session = Arc::new(Session {
			store: Arc::clone(&store),
			pending: Mutex::new(None),
		});
		Self {
			store,
			registry,
			session,
			flush: Mutex::new(()),
		}
	}

	pub fn store(&self) -> &Arc<dyn PreferenceStore> {
		&self.store
	}

	pub fn registry(&self) -> &Arc<EditorRegistry> {
		&self.registry
	}

	pub(crate) fn session_handle(&self) -> Weak<Session> {
		Arc::downgrade(&self.session)
	}

	/// Returns the editor for `key` as type `T`, creating it on first use.
	pub fn editor<T: PrefValue>(&self, key: &str) -> Result<Arc<TypedEditor<T>>> {
		self.registry
			.get_or_create(key, || TypedEditor::new(self, key))
	}

	pub fn string_editor(&self, key: &str) -> Result<Arc<TypedEditor<String>>> {
		self.editor(key)
	}

	pub fn bool_editor(&self, key: &str) -> Result<Arc<TypedEditor<bool>>> {
		self.editor(key)
	}

	pub fn int_editor(&self, key: &str) -> Result<Arc<TypedEditor<i32>>> {
		self.editor(key)
	}

	pub fn long_editor(&self, key: &str) -> Result<Arc<TypedEditor<i64>>> {
		self.editor(key)
	}

	pub fn float_editor(&self, key: &str) -> Result<Arc<TypedEditor<f32>>> {
		self.editor(key)
	}

	pub fn double_editor(&self, key: &str) -> Result<Arc<TypedEditor<f64>>> {
		self.editor(key)
	}

	/// Returns true if the store holds any value under `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.store.contains(key)
	}

	/// Returns true if a session with staged writes is waiting to be flushed.
	pub fn has_pending(&self) -> bool {
		self.session.is_pending()
	}

	/// Stages removal of every stored value.
	pub fn clear(&self) -> &Self {
		self.session.stage(|session| session.clear());
		self
	}

	/// Drops the pending session without writing it.
	pub fn discard(&self) -> &Self {
		if self.session.take().is_some() {
			tracing::debug!("prefs.session.discarded");
		}
		self
	}

	/// Hands the pending session to the store's best-effort write.
	///
	/// Falls back to a synchronous commit when the store cannot apply.
	pub fn apply(&self) {
		let _flushing = self.flush.lock();
		let Some(mut pending) = self.session.take() else {
			return;
		};
		if let Err(error) = pending.apply() {
			tracing::debug!(%error, "prefs.session.apply_fallback");
			if !pending.commit() {
				tracing::warn!("prefs.session.fallback_commit_failed");
			}
		}
	}

	/// Writes the pending session synchronously.
	///
	/// Returns false without touching the store when nothing is pending, and
	/// false when the store reports a failed write.
	pub fn commit(&self) -> bool {
		let _flushing = self.flush.lock();
		let Some(mut pending) = self.session.take() else {
			return false;
		};
		let committed = pending.commit();
		if !committed {
			tracing::warn!("prefs.session.commit_failed");
		}
		committed
	}
}

impl std::fmt::Debug for Preferences {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Preferences")
			.field("pending", &self.has_pending())
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}

/// A user-declared set of named preferences over one [`Preferences`] facade.
///
/// Implementors only provide [`preferences`](PreferenceSet::preferences); the
/// session operations chain on the set itself.
pub trait PreferenceSet {
	fn preferences(&self) -> &Preferences;

	fn clear(&self) -> &Self {
		self.preferences().clear();
		self
	}

	fn discard(&self) -> &Self {
		self.preferences().discard();
		self
	}

	fn apply(&self) {
		self.preferences().apply();
	}

	fn commit(&self) -> bool {
		self.preferences().commit()
	}
}
