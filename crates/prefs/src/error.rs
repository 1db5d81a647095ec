//! Error types for preference editors.

use prefkit_store::ValueType;
use thiserror::Error;

/// Errors raised when provisioning editors.
///
/// Both variants are programming errors in a preference-set declaration, not
/// conditions to recover from at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
	/// A key was requested with a type other than the one it was first handed out as.
	#[error("key '{key}' is already used as {registered}, requested as {requested}")]
	TypeConflict {
		/// The conflicting key.
		key: String,
		/// Type the key was first requested as.
		registered: ValueType,
		/// Type of the rejected request.
		requested: ValueType,
	},

	/// Keys must be non-empty.
	#[error("preference key must not be empty")]
	EmptyKey,
}

/// Result type for editor provisioning.
pub type Result<T> = std::result::Result<T, PrefsError>;
