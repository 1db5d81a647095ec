//! Declaration macro for preference sets.

/// Declares a preference set: a struct wrapping one [`Preferences`](crate::Preferences)
/// facade with one accessor per named, typed key.
///
/// This macro generates:
/// - the struct, holding the facade
/// - `new(store, registry)`
/// - `KEYS`, the declared keys in declaration order
/// - one method per field returning that key's [`TypedEditor`](crate::TypedEditor)
/// - a [`PreferenceSet`](crate::PreferenceSet) impl for `clear`/`discard`/`apply`/`commit`
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use prefkit::{EditorRegistry, MemoryStore, PreferenceSet, PreferenceStore, preferences};
///
/// preferences! {
///     /// Settings of the sample app.
///     pub struct SamplePrefs {
///         /// Display name.
///         name: String = "name",
///         flag: bool = "flag",
///         count: i32 = "count",
///     }
/// }
///
/// fn main() -> prefkit::Result<()> {
///     let store = MemoryStore::new();
///     let prefs = SamplePrefs::new(Arc::new(store.clone()), Arc::new(EditorRegistry::new()));
///     assert_eq!(SamplePrefs::KEYS, &["name", "flag", "count"]);
///
///     prefs.name()?.set("abc".into());
///     prefs.flag()?.set(true);
///     assert!(prefs.commit());
///     assert_eq!(store.read_string("name", String::new()), "abc");
///     assert!(!prefs.count()?.contains());
///     Ok(())
/// }
/// ```
///
/// Field types must implement [`PrefValue`](crate::PrefValue). Declaring the
/// same key twice with different types is caught on first access of the second
/// accessor with [`PrefsError::TypeConflict`](crate::PrefsError::TypeConflict).
#[macro_export]
macro_rules! preferences {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field:ident: $ty:ty = $key:literal
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			prefs: $crate::Preferences,
		}

		impl $name {
			/// Keys declared by this set, in declaration order.
			#[allow(dead_code)]
			$vis const KEYS: &'static [&'static str] = &[$($key),*];

			$vis fn new(
				store: ::std::sync::Arc<dyn $crate::PreferenceStore>,
				registry: ::std::sync::Arc<$crate::EditorRegistry>,
			) -> Self {
				Self {
					prefs: $crate::Preferences::new(store, registry),
				}
			}

			$(
				$(#[$field_meta])*
				#[allow(dead_code)]
				$vis fn $field(&self) -> $crate::Result<::std::sync::Arc<$crate::TypedEditor<$ty>>> {
					self.prefs.editor::<$ty>($key)
				}
			)*
		}

		impl $crate::PreferenceSet for $name {
			fn preferences(&self) -> &$crate::Preferences {
				&self.prefs
			}
		}
	};
}
