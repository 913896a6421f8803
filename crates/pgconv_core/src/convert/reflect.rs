use std::time::SystemTime;

use crate::convert::{FloatWidth, IntKind, ScalarKind, Value};

/// Runtime shape of a value, as seen by the normalizer.
pub trait Reflect {
	/// Describe this value one level deep.
	fn shape(&self) -> Shape<'_>;

	/// Static description of the implementing type.
	///
	/// Sequences use this to learn their element type even when empty.
	fn describe() -> TypeDesc
	where
		Self: Sized,
	{
		TypeDesc::OPAQUE
	}
}

/// One-level view of a value.
pub enum Shape<'a> {
	/// Indirection to another value; `None` when empty.
	Ref(Option<&'a dyn Reflect>),
	/// Primitive scalar, possibly declared through a named alias.
	Scalar {
		/// Value reinterpreted as its bare primitive.
		value: Value,
		/// Whether the declared type differs from the bare primitive.
		alias: bool,
	},
	/// Homogeneous ordered collection.
	Seq {
		/// Static description of the element type.
		elem: TypeDesc,
		/// Elements in order.
		items: Vec<&'a dyn Reflect>,
		/// Whether the sequence type itself is a named alias.
		alias: bool,
	},
	/// Aggregate or unknown value with no normalization rule.
	Opaque,
}

/// Static type description used for sequence elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDesc {
	/// Primitive category, when the type is scalar.
	pub scalar: Option<ScalarKind>,
	/// Whether the type is a named alias over `scalar`.
	pub alias: bool,
}

impl TypeDesc {
	/// Non-scalar type.
	pub const OPAQUE: Self = Self { scalar: None, alias: false };

	/// Bare primitive type of `kind`.
	pub const fn scalar(kind: ScalarKind) -> Self {
		Self { scalar: Some(kind), alias: false }
	}

	/// Same description, marked as a named alias.
	pub const fn aliased(self) -> Self {
		Self { alias: true, ..self }
	}
}

macro_rules! reflect_primitive {
	($($ty:ty => $kind:expr),* $(,)?) => {
		$(
			impl Reflect for $ty {
				fn shape(&self) -> Shape<'_> {
					Shape::Scalar {
						value: Value::from(*self),
						alias: false,
					}
				}

				fn describe() -> TypeDesc {
					TypeDesc::scalar($kind)
				}
			}
		)*
	};
}

reflect_primitive! {
	i8 => ScalarKind::Int(IntKind::I8),
	i16 => ScalarKind::Int(IntKind::I16),
	i32 => ScalarKind::Int(IntKind::I32),
	i64 => ScalarKind::Int(IntKind::I64),
	isize => ScalarKind::Int(IntKind::ISIZE),
	u8 => ScalarKind::Int(IntKind::U8),
	u16 => ScalarKind::Int(IntKind::U16),
	u32 => ScalarKind::Int(IntKind::U32),
	u64 => ScalarKind::Int(IntKind::U64),
	usize => ScalarKind::Int(IntKind::USIZE),
	f32 => ScalarKind::Float(FloatWidth::F32),
	f64 => ScalarKind::Float(FloatWidth::F64),
	bool => ScalarKind::Bool,
	SystemTime => ScalarKind::Time,
}

impl Reflect for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar {
			value: Value::from(self.as_str()),
			alias: false,
		}
	}

	fn describe() -> TypeDesc {
		TypeDesc::scalar(ScalarKind::Text)
	}
}

impl Reflect for str {
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar {
			value: Value::from(self),
			alias: false,
		}
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ref(self.as_ref().map(|inner| inner as &dyn Reflect))
	}
}

impl<T: Reflect> Reflect for Box<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ref(Some(&**self as &dyn Reflect))
	}
}

impl<T: Reflect> Reflect for &T {
	fn shape(&self) -> Shape<'_> {
		Shape::Ref(Some(*self as &dyn Reflect))
	}
}

impl<T: Reflect> Reflect for [T] {
	fn shape(&self) -> Shape<'_> {
		Shape::Seq {
			elem: T::describe(),
			items: self.iter().map(|item| item as &dyn Reflect).collect(),
			alias: false,
		}
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	fn shape(&self) -> Shape<'_> {
		self.as_slice().shape()
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn shape(&self) -> Shape<'_> {
		self.as_slice().shape()
	}
}

/// Declare a newtype as a named alias over a float, bool, text, or time primitive.
///
/// The newtype must be a single-field tuple struct whose field is the primitive.
/// Integer aliases should use [`int_alias!`](crate::int_alias), which also makes
/// the newtype an assignment destination.
#[macro_export]
macro_rules! scalar_alias {
	($name:ty => $prim:ty) => {
		impl $crate::convert::Reflect for $name {
			fn shape(&self) -> $crate::convert::Shape<'_> {
				$crate::convert::Shape::Scalar {
					value: $crate::convert::Value::from(::core::clone::Clone::clone(&self.0)),
					alias: true,
				}
			}

			fn describe() -> $crate::convert::TypeDesc {
				<$prim as $crate::convert::Reflect>::describe().aliased()
			}
		}
	};
}

/// Declare a newtype as a named alias over a sequence of `$elem`.
///
/// The newtype's single field must iterate by reference (`Vec`, array, boxed slice).
///
/// ```
/// struct Ids(Vec<i32>);
/// pgconv::seq_alias!(Ids => i32);
///
/// let ids = Ids(vec![4, 2]);
/// let (_, changed) = pgconv::convert::underlying_slice(&ids).unwrap();
/// assert!(changed);
/// ```
#[macro_export]
macro_rules! seq_alias {
	($name:ty => $elem:ty) => {
		impl $crate::convert::Reflect for $name {
			fn shape(&self) -> $crate::convert::Shape<'_> {
				$crate::convert::Shape::Seq {
					elem: <$elem as $crate::convert::Reflect>::describe(),
					items: self.0.iter().map(|item| item as &dyn $crate::convert::Reflect).collect(),
					alias: true,
				}
			}
		}
	};
}
