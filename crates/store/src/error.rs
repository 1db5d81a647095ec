//! Error types for preference stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// File the operation targeted.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The backing document is not valid JSON for the preference format.
	#[error("malformed preference document {path}: {error}")]
	Json {
		/// File that failed to parse.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_json::Error,
	},

	/// The backing document was written by an incompatible format version.
	#[error("unsupported preference document version {found} in {path}")]
	UnsupportedVersion {
		/// File carrying the version.
		path: PathBuf,
		/// Version found in the document.
		found: u32,
	},

	/// A NaN or infinite float was staged for a store that cannot encode it.
	#[error("non-finite value for key '{key}' cannot be stored")]
	NonFinite {
		/// Key the value was staged under.
		key: String,
	},

	/// The store has no asynchronous write path.
	#[error("asynchronous apply is not supported by this store")]
	ApplyUnsupported,

	/// The background writer stopped accepting snapshots.
	#[error("background writer for {path} has shut down")]
	WriterClosed {
		/// File the writer was responsible for.
		path: PathBuf,
	},
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
