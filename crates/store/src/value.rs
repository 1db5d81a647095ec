use serde::{Deserialize, Serialize};

/// A value held by a preference store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoreValue {
	/// UTF-8 string.
	String(String),
	/// Boolean flag.
	Boolean(bool),
	/// 32-bit signed integer.
	Integer(i32),
	/// 64-bit signed integer.
	Long(i64),
	/// Single-precision float.
	Float(f32),
	/// Double-precision float.
	Double(f64),
}

impl StoreValue {
	/// Returns the type tag of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			StoreValue::String(_) => ValueType::String,
			StoreValue::Boolean(_) => ValueType::Boolean,
			StoreValue::Integer(_) => ValueType::Integer,
			StoreValue::Long(_) => ValueType::Long,
			StoreValue::Float(_) => ValueType::Float,
			StoreValue::Double(_) => ValueType::Double,
		}
	}

	/// Returns true if this value carries the given type tag.
	pub fn matches_type(&self, ty: ValueType) -> bool {
		self.value_type() == ty
	}

	/// Returns false for NaN and infinite floats.
	pub fn is_finite(&self) -> bool {
		match self {
			StoreValue::Float(v) => v.is_finite(),
			StoreValue::Double(v) => v.is_finite(),
			_ => true,
		}
	}
}

impl std::fmt::Display for StoreValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			StoreValue::String(v) => f.write_str(v),
			StoreValue::Boolean(v) => write!(f, "{v}"),
			StoreValue::Integer(v) => write!(f, "{v}"),
			StoreValue::Long(v) => write!(f, "{v}"),
			StoreValue::Float(v) => write!(f, "{v}"),
			StoreValue::Double(v) => write!(f, "{v}"),
		}
	}
}

impl From<String> for StoreValue {
	fn from(v: String) -> Self {
		StoreValue::String(v)
	}
}

impl From<&str> for StoreValue {
	fn from(v: &str) -> Self {
		StoreValue::String(v.to_string())
	}
}

impl From<bool> for StoreValue {
	fn from(v: bool) -> Self {
		StoreValue::Boolean(v)
	}
}

impl From<i32> for StoreValue {
	fn from(v: i32) -> Self {
		StoreValue::Integer(v)
	}
}

impl From<i64> for StoreValue {
	fn from(v: i64) -> Self {
		StoreValue::Long(v)
	}
}

impl From<f32> for StoreValue {
	fn from(v: f32) -> Self {
		StoreValue::Float(v)
	}
}

impl From<f64> for StoreValue {
	fn from(v: f64) -> Self {
		StoreValue::Double(v)
	}
}

/// The type of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// String type.
	String,
	/// Boolean type.
	Boolean,
	/// 32-bit integer type.
	Integer,
	/// 64-bit integer type.
	Long,
	/// Single-precision float type.
	Float,
	/// Double-precision float type.
	Double,
}

impl ValueType {
	/// All value types, in declaration order.
	pub const ALL: [ValueType; 6] = [
		ValueType::String,
		ValueType::Boolean,
		ValueType::Integer,
		ValueType::Long,
		ValueType::Float,
		ValueType::Double,
	];

	/// Returns the lowercase name used in documents and messages.
	pub fn name(self) -> &'static str {
		match self {
			ValueType::String => "string",
			ValueType::Boolean => "boolean",
			ValueType::Integer => "integer",
			ValueType::Long => "long",
			ValueType::Float => "float",
			ValueType::Double => "double",
		}
	}
}

impl std::fmt::Display for ValueType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
