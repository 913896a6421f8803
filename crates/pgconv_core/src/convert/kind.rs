use crate::convert::Bound;

/// Storage width of an integer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
	/// 8-bit storage.
	W8,
	/// 16-bit storage.
	W16,
	/// 32-bit storage.
	W32,
	/// 64-bit storage.
	W64,
	/// Platform pointer width (`isize`/`usize`).
	Native,
}

impl IntWidth {
	/// Width in bits.
	pub fn bits(self) -> u32 {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
			Self::Native => usize::BITS,
		}
	}
}

/// Whether an integer kind stores negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
	/// Two's-complement signed storage.
	Signed,
	/// Unsigned storage.
	Unsigned,
}

/// Integer destination kind as `(width, signedness)` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntKind {
	/// Storage width.
	pub width: IntWidth,
	/// Signedness.
	pub signedness: Signedness,
}

impl IntKind {
	/// `i8`.
	pub const I8: Self = Self::new(IntWidth::W8, Signedness::Signed);
	/// `i16`.
	pub const I16: Self = Self::new(IntWidth::W16, Signedness::Signed);
	/// `i32`.
	pub const I32: Self = Self::new(IntWidth::W32, Signedness::Signed);
	/// `i64`.
	pub const I64: Self = Self::new(IntWidth::W64, Signedness::Signed);
	/// `isize`.
	pub const ISIZE: Self = Self::new(IntWidth::Native, Signedness::Signed);
	/// `u8`.
	pub const U8: Self = Self::new(IntWidth::W8, Signedness::Unsigned);
	/// `u16`.
	pub const U16: Self = Self::new(IntWidth::W16, Signedness::Unsigned);
	/// `u32`.
	pub const U32: Self = Self::new(IntWidth::W32, Signedness::Unsigned);
	/// `u64`.
	pub const U64: Self = Self::new(IntWidth::W64, Signedness::Unsigned);
	/// `usize`.
	pub const USIZE: Self = Self::new(IntWidth::Native, Signedness::Unsigned);

	/// Every supported integer kind, signed first.
	pub const ALL: [Self; 10] = [
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::ISIZE,
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U64,
		Self::USIZE,
	];

	/// Build a kind from width and signedness.
	pub const fn new(width: IntWidth, signedness: Signedness) -> Self {
		Self { width, signedness }
	}

	/// Width in bits.
	pub fn bits(self) -> u32 {
		self.width.bits()
	}

	/// Whether negative values are representable.
	pub fn is_signed(self) -> bool {
		self.signedness == Signedness::Signed
	}

	/// Rust spelling of the primitive storing this kind.
	pub fn name(self) -> &'static str {
		match (self.signedness, self.width) {
			(Signedness::Signed, IntWidth::W8) => "i8",
			(Signedness::Signed, IntWidth::W16) => "i16",
			(Signedness::Signed, IntWidth::W32) => "i32",
			(Signedness::Signed, IntWidth::W64) => "i64",
			(Signedness::Signed, IntWidth::Native) => "isize",
			(Signedness::Unsigned, IntWidth::W8) => "u8",
			(Signedness::Unsigned, IntWidth::W16) => "u16",
			(Signedness::Unsigned, IntWidth::W32) => "u32",
			(Signedness::Unsigned, IntWidth::W64) => "u64",
			(Signedness::Unsigned, IntWidth::Native) => "usize",
		}
	}

	/// Look up a kind by its Rust spelling.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}

	/// Smallest representable value, within the `i64` source domain.
	pub fn min_i64(self) -> i64 {
		match self.signedness {
			Signedness::Unsigned => 0,
			Signedness::Signed if self.bits() >= 64 => i64::MIN,
			Signedness::Signed => -(1_i64 << (self.bits() - 1)),
		}
	}

	/// Largest representable value, clamped to the `i64` source domain.
	pub fn max_i64(self) -> i64 {
		match self.signedness {
			Signedness::Signed if self.bits() >= 64 => i64::MAX,
			Signedness::Signed => (1_i64 << (self.bits() - 1)) - 1,
			Signedness::Unsigned if self.bits() >= 64 => i64::MAX,
			Signedness::Unsigned => (1_i64 << self.bits()) - 1,
		}
	}

	/// True largest representable value, for display.
	pub fn max_u64(self) -> u64 {
		match self.signedness {
			Signedness::Signed => self.max_i64().unsigned_abs(),
			Signedness::Unsigned if self.bits() >= 64 => u64::MAX,
			Signedness::Unsigned => (1_u64 << self.bits()) - 1,
		}
	}

	/// Validate `value` against this kind's bounds.
	///
	/// Unsigned kinds reject negative values before the width bound is checked.
	pub fn check(self, value: i64) -> std::result::Result<(), Bound> {
		if self.signedness == Signedness::Unsigned && value < 0 {
			return Err(Bound::BelowZero);
		}
		if value < self.min_i64() {
			return Err(Bound::BelowMin);
		}
		if value > self.max_i64() {
			return Err(Bound::AboveMax);
		}
		Ok(())
	}
}

/// Storage width of a float kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
	/// `f32`.
	F32,
	/// `f64`.
	F64,
}

impl FloatWidth {
	/// Rust spelling of the primitive storing this width.
	pub fn name(self) -> &'static str {
		match self {
			Self::F32 => "f32",
			Self::F64 => "f64",
		}
	}
}

/// Primitive category a normalized scalar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	/// Integer of a given width and signedness.
	Int(IntKind),
	/// Float of a given width.
	Float(FloatWidth),
	/// Boolean.
	Bool,
	/// UTF-8 text.
	Text,
	/// Instant in time.
	Time,
}

impl ScalarKind {
	/// Stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Self::Int(kind) => kind.name(),
			Self::Float(width) => width.name(),
			Self::Bool => "bool",
			Self::Text => "text",
			Self::Time => "time",
		}
	}

	/// Whether the numeric normalizer accepts this kind.
	pub fn is_number_like(self) -> bool {
		matches!(self, Self::Int(_) | Self::Float(_) | Self::Text)
	}
}
