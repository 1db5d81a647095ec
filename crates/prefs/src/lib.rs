//! Typed preference editors over a [`PreferenceStore`].
//!
//! A preference set declares named, typed keys once and hands out one
//! [`TypedEditor`] per key. Reads go straight to the store. Writes from every
//! editor of one [`Preferences`] facade stage into that facade's single edit
//! session and land together on [`Preferences::commit`] or
//! [`Preferences::apply`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefkit::{EditorRegistry, MemoryStore, PreferenceSet, preferences};
//!
//! preferences! {
//!     pub struct AppPrefs {
//!         /// Display name.
//!         name: String = "name",
//!         flag: bool = "flag",
//!         count: i32 = "count",
//!     }
//! }
//!
//! fn main() -> prefkit::Result<()> {
//!     let registry = Arc::new(EditorRegistry::new());
//!     let prefs = AppPrefs::new(Arc::new(MemoryStore::new()), registry);
//!
//!     prefs.name()?.set("abc".into());
//!     prefs.count()?.set(42);
//!     assert!(prefs.commit());
//!     assert_eq!(prefs.count()?.get(0), 42);
//!     assert!(!prefs.flag()?.get(false));
//!     Ok(())
//! }
//! ```
//!
//! The [`EditorRegistry`] pins each key to one value type: asking for `count`
//! as a `String` after it was handed out as an `i32` fails with
//! [`PrefsError::TypeConflict`].

mod editor;
mod error;
mod facade;
mod macros;
mod registry;
mod value;

pub use editor::TypedEditor;
pub use error::{PrefsError, Result};
pub use facade::{PreferenceSet, Preferences};
pub use prefkit_store::{
	JsonFileStore, MemoryStore, PreferenceStore, StoreEditor, StoreError, StoreValue, ValueType,
};
pub use registry::EditorRegistry;
pub use value::PrefValue;
