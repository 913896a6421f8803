use std::time::SystemTime;

use crate::convert::{FloatWidth, IntKind};

/// Caller-owned storage that a decoded value can be written into.
pub trait Target {
	/// Report which destination category this storage belongs to.
	fn target(&mut self) -> Dest<'_>;
}

/// Destination category discovered at assignment time.
pub enum Dest<'a> {
	/// Plain integer primitive.
	Int(IntSlot<'a>),
	/// Plain float primitive.
	Float(FloatSlot<'a>),
	/// Optional slot that can be allocated or cleared.
	Optional(&'a mut dyn OptionalTarget),
	/// Named alias over an integer kind.
	Alias(&'a mut dyn IntTarget),
	/// Storage with no conversion rule.
	Unsupported(&'static str),
}

impl Dest<'_> {
	/// Type label used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Int(slot) => slot.kind().name(),
			Self::Float(slot) => slot.width().name(),
			Self::Optional(slot) => slot.type_name(),
			Self::Alias(slot) => slot.type_name(),
			Self::Unsupported(name) => *name,
		}
	}
}

/// Mutable reference to a plain integer primitive.
pub enum IntSlot<'a> {
	/// `i8` storage.
	I8(&'a mut i8),
	/// `i16` storage.
	I16(&'a mut i16),
	/// `i32` storage.
	I32(&'a mut i32),
	/// `i64` storage.
	I64(&'a mut i64),
	/// `isize` storage.
	Isize(&'a mut isize),
	/// `u8` storage.
	U8(&'a mut u8),
	/// `u16` storage.
	U16(&'a mut u16),
	/// `u32` storage.
	U32(&'a mut u32),
	/// `u64` storage.
	U64(&'a mut u64),
	/// `usize` storage.
	Usize(&'a mut usize),
}

impl IntSlot<'_> {
	/// Integer kind of the referenced storage.
	pub fn kind(&self) -> IntKind {
		match self {
			Self::I8(_) => IntKind::I8,
			Self::I16(_) => IntKind::I16,
			Self::I32(_) => IntKind::I32,
			Self::I64(_) => IntKind::I64,
			Self::Isize(_) => IntKind::ISIZE,
			Self::U8(_) => IntKind::U8,
			Self::U16(_) => IntKind::U16,
			Self::U32(_) => IntKind::U32,
			Self::U64(_) => IntKind::U64,
			Self::Usize(_) => IntKind::USIZE,
		}
	}

	/// Store a value already validated against [`IntSlot::kind`].
	pub(crate) fn store(self, value: i64) {
		match self {
			Self::I8(slot) => *slot = IntPrimitive::narrow(value),
			Self::I16(slot) => *slot = IntPrimitive::narrow(value),
			Self::I32(slot) => *slot = IntPrimitive::narrow(value),
			Self::I64(slot) => *slot = value,
			Self::Isize(slot) => *slot = IntPrimitive::narrow(value),
			Self::U8(slot) => *slot = IntPrimitive::narrow(value),
			Self::U16(slot) => *slot = IntPrimitive::narrow(value),
			Self::U32(slot) => *slot = IntPrimitive::narrow(value),
			Self::U64(slot) => *slot = IntPrimitive::narrow(value),
			Self::Usize(slot) => *slot = IntPrimitive::narrow(value),
		}
	}
}

/// Mutable reference to a plain float primitive.
pub enum FloatSlot<'a> {
	/// `f32` storage.
	F32(&'a mut f32),
	/// `f64` storage.
	F64(&'a mut f64),
}

impl FloatSlot<'_> {
	/// Float width of the referenced storage.
	pub fn width(&self) -> FloatWidth {
		match self {
			Self::F32(_) => FloatWidth::F32,
			Self::F64(_) => FloatWidth::F64,
		}
	}

	/// Store `value`, rounding to the nearest `f32` when narrower.
	pub(crate) fn store(self, value: f64) {
		match self {
			Self::F32(slot) => *slot = value as f32,
			Self::F64(slot) => *slot = value,
		}
	}
}

/// Integer destination whose kind is only known through its declared width and sign.
pub trait IntTarget {
	/// Width and signedness of the underlying integer.
	fn int_kind(&self) -> IntKind;

	/// Store a value already validated against [`IntTarget::int_kind`].
	fn store(&mut self, value: i64);

	/// Type label used in error messages.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Optional storage: a slot that is either empty or holds another destination.
pub trait OptionalTarget {
	/// Whether the inner slot currently holds a value.
	fn is_allocated(&self) -> bool;

	/// Return the inner destination, binding a zero-valued one first when empty.
	fn allocate(&mut self) -> &mut dyn Target;

	/// Reset the slot to empty.
	fn clear(&mut self);

	/// Type label used in error messages.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl<T: Target + Default> OptionalTarget for Option<T> {
	fn is_allocated(&self) -> bool {
		self.is_some()
	}

	fn allocate(&mut self) -> &mut dyn Target {
		self.get_or_insert_with(T::default)
	}

	fn clear(&mut self) {
		*self = None;
	}
}

impl<T: Target + Default> Target for Option<T> {
	fn target(&mut self) -> Dest<'_> {
		Dest::Optional(self)
	}
}

impl<T: Target + ?Sized> Target for Box<T> {
	fn target(&mut self) -> Dest<'_> {
		(**self).target()
	}
}

/// Lossless narrowing for integer primitives, used after range validation.
#[doc(hidden)]
pub trait IntPrimitive: Sized {
	/// Kind stored by the primitive.
	const KIND: IntKind;

	/// Narrow a value that already passed `KIND.check`.
	fn narrow(value: i64) -> Self;
}

macro_rules! int_primitive {
	($($ty:ty => $kind:ident / $variant:ident),* $(,)?) => {
		$(
			impl IntPrimitive for $ty {
				const KIND: IntKind = IntKind::$kind;

				fn narrow(value: i64) -> Self {
					// Range-checked by the caller.
					value as $ty
				}
			}

			impl Target for $ty {
				fn target(&mut self) -> Dest<'_> {
					Dest::Int(IntSlot::$variant(self))
				}
			}
		)*
	};
}

int_primitive! {
	i8 => I8 / I8,
	i16 => I16 / I16,
	i32 => I32 / I32,
	i64 => I64 / I64,
	isize => ISIZE / Isize,
	u8 => U8 / U8,
	u16 => U16 / U16,
	u32 => U32 / U32,
	u64 => U64 / U64,
	usize => USIZE / Usize,
}

impl Target for f32 {
	fn target(&mut self) -> Dest<'_> {
		Dest::Float(FloatSlot::F32(self))
	}
}

impl Target for f64 {
	fn target(&mut self) -> Dest<'_> {
		Dest::Float(FloatSlot::F64(self))
	}
}

macro_rules! unsupported_target {
	($($ty:ty => $name:literal),* $(,)?) => {
		$(
			impl Target for $ty {
				fn target(&mut self) -> Dest<'_> {
					Dest::Unsupported($name)
				}
			}
		)*
	};
}

unsupported_target! {
	bool => "bool",
	String => "String",
	SystemTime => "SystemTime",
}

/// Declare a newtype as a named alias over an integer primitive.
///
/// The newtype becomes normalizable (its bare primitive is exposed with
/// `changed = true`) and a width/sign-aware assignment destination.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Port(u16);
/// pgconv::int_alias!(Port => u16);
///
/// let mut port = Port::default();
/// pgconv::convert::assign_int(5432, pgconv::convert::Status::Present, &mut port).unwrap();
/// assert_eq!(port, Port(5432));
/// ```
#[macro_export]
macro_rules! int_alias {
	($name:ty => $prim:ty) => {
		$crate::scalar_alias!($name => $prim);

		impl $crate::convert::IntTarget for $name {
			fn int_kind(&self) -> $crate::convert::IntKind {
				<$prim as $crate::convert::IntPrimitive>::KIND
			}

			fn store(&mut self, value: i64) {
				self.0 = <$prim as $crate::convert::IntPrimitive>::narrow(value);
			}
		}

		impl $crate::convert::Target for $name {
			fn target(&mut self) -> $crate::convert::Dest<'_> {
				$crate::convert::Dest::Alias(self)
			}
		}
	};
}
