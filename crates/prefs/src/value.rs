use prefkit_store::{StoreValue, ValueType};

// Seal PrefValue so only the six store types can back an editor.
mod sealed {
	pub trait Sealed {}
	impl Sealed for String {}
	impl Sealed for bool {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
	impl Sealed for f32 {}
	impl Sealed for f64 {}
}

/// Rust types that can be stored through a [`TypedEditor`](crate::TypedEditor).
pub trait PrefValue: sealed::Sealed + Clone + Send + Sync + 'static {
	/// Type tag this Rust type is stored under.
	const VALUE_TYPE: ValueType;

	/// Extracts the value, returning `None` if the stored type differs.
	fn from_store(value: StoreValue) -> Option<Self>;

	fn into_store(self) -> StoreValue;
}

impl PrefValue for String {
	const VALUE_TYPE: ValueType = ValueType::String;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::String(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::String(self)
	}
}

impl PrefValue for bool {
	const VALUE_TYPE: ValueType = ValueType::Boolean;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::Boolean(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::Boolean(self)
	}
}

impl PrefValue for i32 {
	const VALUE_TYPE: ValueType = ValueType::Integer;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::Integer(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::Integer(self)
	}
}

impl PrefValue for i64 {
	const VALUE_TYPE: ValueType = ValueType::Long;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::Long(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::Long(self)
	}
}

impl PrefValue for f32 {
	const VALUE_TYPE: ValueType = ValueType::Float;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::Float(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::Float(self)
	}
}

impl PrefValue for f64 {
	const VALUE_TYPE: ValueType = ValueType::Double;

	fn from_store(value: StoreValue) -> Option<Self> {
		match value {
			StoreValue::Double(v) => Some(v),
			_ => None,
		}
	}

	fn into_store(self) -> StoreValue {
		StoreValue::Double(self)
	}
}
