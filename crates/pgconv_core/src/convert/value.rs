use std::fmt;
use std::time::SystemTime;

use crate::convert::{FloatWidth, IntKind, ScalarKind};

/// Canonical, alias-free value produced by normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `i8` scalar.
	I8(i8),
	/// `i16` scalar.
	I16(i16),
	/// `i32` scalar.
	I32(i32),
	/// `i64` scalar.
	I64(i64),
	/// `isize` scalar.
	Isize(isize),
	/// `u8` scalar.
	U8(u8),
	/// `u16` scalar.
	U16(u16),
	/// `u32` scalar.
	U32(u32),
	/// `u64` scalar.
	U64(u64),
	/// `usize` scalar.
	Usize(usize),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Boolean scalar.
	Bool(bool),
	/// UTF-8 text.
	Text(Box<str>),
	/// Instant in time.
	Time(SystemTime),
	/// Homogeneous sequence typed by its canonical element kind.
	Seq {
		/// Canonical element kind.
		elem: ScalarKind,
		/// Elements in source order.
		items: Vec<Value>,
	},
}

impl Value {
	/// Scalar category, or `None` for sequences.
	pub fn scalar_kind(&self) -> Option<ScalarKind> {
		Some(match self {
			Self::I8(_) => ScalarKind::Int(IntKind::I8),
			Self::I16(_) => ScalarKind::Int(IntKind::I16),
			Self::I32(_) => ScalarKind::Int(IntKind::I32),
			Self::I64(_) => ScalarKind::Int(IntKind::I64),
			Self::Isize(_) => ScalarKind::Int(IntKind::ISIZE),
			Self::U8(_) => ScalarKind::Int(IntKind::U8),
			Self::U16(_) => ScalarKind::Int(IntKind::U16),
			Self::U32(_) => ScalarKind::Int(IntKind::U32),
			Self::U64(_) => ScalarKind::Int(IntKind::U64),
			Self::Usize(_) => ScalarKind::Int(IntKind::USIZE),
			Self::F32(_) => ScalarKind::Float(FloatWidth::F32),
			Self::F64(_) => ScalarKind::Float(FloatWidth::F64),
			Self::Bool(_) => ScalarKind::Bool,
			Self::Text(_) => ScalarKind::Text,
			Self::Time(_) => ScalarKind::Time,
			Self::Seq { .. } => return None,
		})
	}

	/// Stable type label; sequences report `"seq"`.
	pub fn type_label(&self) -> &'static str {
		match self.scalar_kind() {
			Some(kind) => kind.name(),
			None => "seq",
		}
	}
}

macro_rules! value_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

value_from! {
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	bool => Bool,
	SystemTime => Time,
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value.into_boxed_str())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.into())
	}
}

/// Numeric source value handed over by a decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
	/// 64-bit signed integer.
	Int(i64),
	/// 64-bit float.
	Float(f64),
}

impl fmt::Display for Numeric {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
		}
	}
}

impl From<i64> for Numeric {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Numeric {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
