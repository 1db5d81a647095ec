//! JSON-file preference store.
//!
//! The whole store is one JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "name": { "type": "string", "value": "abc" },
//!     "count": { "type": "integer", "value": 42 }
//!   }
//! }
//! ```
//!
//! Entries are held in memory; every flush rewrites the document through a
//! temporary file in the same directory that is then renamed over the target.
//! [`StoreEditor::commit`] writes on the calling thread. [`StoreEditor::apply`]
//! updates memory and hands the snapshot to a background writer, which only
//! writes the newest snapshot it has been given.
//!
//! Non-finite floats have no JSON representation: a session staging one is
//! rejected as a whole with [`StoreError::NonFinite`] and leaves the store
//! untouched.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::{PendingEdits, PreferenceStore, Result, StoreEditor, StoreError, StoreValue};


/// Format version written to and accepted from disk.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct Document {
	version: u32,
	#[serde(default)]
	entries: BTreeMap<String, StoreValue>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
	version: u32,
	entries: &'a BTreeMap<String, StoreValue>,
}

/// A versioned copy of the entries, ready to be written.
struct Snapshot {
	seq: u64,
	entries: BTreeMap<String, StoreValue>,
}

struct Shared {
	path: PathBuf,
	entries: RwLock<BTreeMap<String, StoreValue>>,
	/// Sequence number of the newest snapshot taken; bumped under the entries write lock.
	seq: AtomicU64,
	/// Sequence number of the newest snapshot that reached the writer. File writes serialize on this lock.
	settled: Mutex<u64>,
	settled_changed: Condvar,
}

impl Shared {
	/// Applies `edits` to memory and returns the resulting snapshot.
	fn stage(&self, edits: &PendingEdits) -> Snapshot {
		let mut entries = self.entries.write();
		edits.apply_to(&mut entries);
		let seq = self.seq.fetch_add(1, Ordering::AcqRel) + 1;
		Snapshot {
			seq,
			entries: entries.clone(),
		}
	}

	/// Writes `snapshot` unless a newer one is already on disk.
	fn persist(&self, snapshot: &Snapshot) -> Result<()> {
		let mut settled = self.settled.lock();
		if *settled >= snapshot.seq {
			return Ok(());
		}
		let result = write_document(&self.path, &snapshot.entries);
		*settled = snapshot.seq;
		self.settled_changed.notify_all();
		result
	}

	/// Marks `seq` settled without writing it, so [`JsonFileStore::flush`] does not wait on it.
	fn abandon(&self, seq: u64) {
		let mut settled = self.settled.lock();
		if *settled < seq {
			*settled = seq;
			self.settled_changed.notify_all();
		}
	}

	fn wait_settled(&self, target: u64) {
		let mut settled = self.settled.lock();
		while *settled < target {
			self.settled_changed.wait(&mut settled);
		}
	}
}

fn check_finite(edits: &PendingEdits) -> Result<()> {
	match edits.non_finite_key() {
		Some(key) => Err(StoreError::NonFinite {
			key: key.to_string(),
		}),
		None => Ok(()),
	}
}

/// Owns the background writer thread; dropping it drains pending snapshots.
struct Writer {
	tx: Option<Sender<Snapshot>>,
	handle: Option<JoinHandle<()>>,
}

impl Writer {
	fn spawn(shared: Arc<Shared>) -> Result<Self> {
		let (tx, rx) = mpsc::channel();
		let path = shared.path.clone();
		let handle = thread::Builder::new()
			.name("prefkit-writer".into())
			.spawn(move || run_writer(shared, rx))
			.map_err(|error| StoreError::Io { path, error })?;
		Ok(Self {
			tx: Some(tx),
			handle: Some(handle),
		})
	}

	fn send(&self, snapshot: Snapshot) -> std::result::Result<(), Snapshot> {
		match &self.tx {
			Some(tx) => tx.send(snapshot).map_err(|e| e.0),
			None => Err(snapshot),
		}
	}
}

impl Drop for Writer {
	fn drop(&mut self) {
		drop(self.tx.take());
		if let Some(handle) = self.handle.take()
			&& handle.join().is_err()
		{
			tracing::error!("prefs.json.writer_panicked");
		}
	}
}

fn run_writer(shared: Arc<Shared>, rx: Receiver<Snapshot>) {
	while let Ok(mut snapshot) = rx.recv() {
		while let Ok(newer) = rx.try_recv() {
			snapshot = newer;
		}
		match shared.persist(&snapshot) {
			Ok(()) => tracing::trace!(seq = snapshot.seq, path = %shared.path.display(), "prefs.json.applied"),
			Err(error) => tracing::warn!(seq = snapshot.seq, %error, "prefs.json.apply_write_failed"),
		}
	}
}

fn write_document(path: &Path, entries: &BTreeMap<String, StoreValue>) -> Result<()> {
	let io_err = |error: std::io::Error| StoreError::Io {
		path: path.to_path_buf(),
		error,
	};
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	std::fs::create_dir_all(dir).map_err(io_err)?;

	let doc = DocumentRef {
		version: DOCUMENT_VERSION,
		entries,
	};
	let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
	serde_json::to_writer_pretty(&mut tmp, &doc).map_err(|error| StoreError::Json {
		path: path.to_path_buf(),
		error,
	})?;
	tmp.write_all(b"\n").map_err(io_err)?;
	tmp.as_file().sync_all().map_err(io_err)?;
	tmp.persist(path).map_err(|e| io_err(e.error))?;
	Ok(())
}

fn read_document(path: &Path) -> Result<BTreeMap<String, StoreValue>> {
	let bytes = match std::fs::read(path) {
		Ok(bytes) => bytes,
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
		Err(error) => {
			return Err(StoreError::Io {
				path: path.to_path_buf(),
				error,
			});
		}
	};
	let doc: Document = serde_json::from_slice(&bytes).map_err(|error| StoreError::Json {
		path: path.to_path_buf(),
		error,
	})?;
	if doc.version != DOCUMENT_VERSION {
		return Err(StoreError::UnsupportedVersion {
			path: path.to_path_buf(),
			found: doc.version,
		});
	}
	Ok(doc.entries)
}

/// Preference store backed by a JSON document on disk.
///
/// Clones share entries and the background writer. The writer is joined when
/// the last clone and the last editor opened from it are dropped, so every
/// applied snapshot reaches disk before that point.
#[derive(Clone)]
pub struct JsonFileStore {
	shared: Arc<Shared>,
	writer: Arc<Writer>,
}

impl JsonFileStore {
	/// Opens the document at `path`. A missing file opens an empty store.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let entries = read_document(&path)?;
		tracing::debug!(path = %path.display(), entries = entries.len(), "prefs.json.open");

		let shared = Arc::new(Shared {
			path,
			entries: RwLock::new(entries),
			seq: AtomicU64::new(0),
			settled: Mutex::new(0),
			settled_changed: Condvar::new(),
		});
		let writer = Writer::spawn(Arc::clone(&shared))?;
		Ok(Self {
			shared,
			writer: Arc::new(writer),
		})
	}

	pub fn path(&self) -> &Path {
		&self.shared.path
	}

	/// Blocks until every snapshot handed off so far has been written.
	pub fn flush(&self) {
		let target = self.shared.seq.load(Ordering::Acquire);
		self.shared.wait_settled(target);
	}
}

impl std::fmt::Debug for JsonFileStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JsonFileStore")
			.field("path", &self.shared.path)
			.finish_non_exhaustive()
	}
}

impl PreferenceStore for JsonFileStore {
	fn read(&self, key: &str) -> Option<StoreValue> {
		self.shared.entries.read().get(key).cloned()
	}

	fn keys(&self) -> Vec<String> {
		self.shared.entries.read().keys().cloned().collect()
	}

	fn edit(&self) -> Box<dyn StoreEditor> {
		Box::new(JsonEditor {
			store: self.clone(),
			edits: PendingEdits::new(),
		})
	}

	fn contains(&self, key: &str) -> bool {
		self.shared.entries.read().contains_key(key)
	}
}

struct JsonEditor {
	store: JsonFileStore,
	edits: PendingEdits,
}

impl StoreEditor for JsonEditor {
	fn put(&mut self, key: &str, value: StoreValue) {
		self.edits.put(key, value);
	}

	fn remove(&mut self, key: &str) {
		self.edits.remove(key);
	}

	fn clear(&mut self) {
		self.edits.clear();
	}

	/// Always rewrites the document, even with nothing staged.
	fn commit(&mut self) -> bool {
		let edits = self.edits.take();
		if let Err(error) = check_finite(&edits) {
			tracing::warn!(%error, "prefs.json.commit_rejected");
			return false;
		}
		let shared = &self.store.shared;
		let snapshot = shared.stage(&edits);
		match shared.persist(&snapshot) {
			Ok(()) => true,
			Err(error) => {
				tracing::warn!(%error, "prefs.json.commit_failed");
				false
			}
		}
	}

	/// Rejected sessions stay staged, so a fallback commit reports the failure.
	fn apply(&mut self) -> Result<()> {
		check_finite(&self.edits)?;
		let edits = self.edits.take();
		let snapshot = self.store.shared.stage(&edits);
		if let Err(snapshot) = self.store.writer.send(snapshot) {
			// Memory already holds the new values; a commit persists them.
			tracing::debug!(seq = snapshot.seq, "prefs.json.writer_gone");
			self.store.shared.abandon(snapshot.seq);
			return Err(StoreError::WriterClosed {
				path: self.store.shared.path.clone(),
			});
		}
		Ok(())
	}
}
