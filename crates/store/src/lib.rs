//! Store contract for typed preferences.
//!
//! A [`PreferenceStore`] is a durable key to [`StoreValue`] dictionary. Reads go
//! straight to the store; writes are staged on a [`StoreEditor`] obtained from
//! [`PreferenceStore::edit`] and land together on [`StoreEditor::commit`] or
//! [`StoreEditor::apply`].
//!
//! Two stores ship with the crate:
//!
//! - [`MemoryStore`] - process-local map, useful for tests and ephemeral state
//! - [`JsonFileStore`] - JSON document on disk with a background writer for
//!   [`StoreEditor::apply`]

mod error;
pub mod json;
pub mod memory;
mod pending;
mod store;
mod value;

pub use error::{Result, StoreError};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use pending::PendingEdits;
pub use store::{PreferenceStore, StoreEditor};
pub use value::{StoreValue, ValueType};
