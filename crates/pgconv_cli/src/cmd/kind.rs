use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pgconv::convert::{IntKind, Status};

/// Value kind selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
	I8,
	I16,
	I32,
	I64,
	Isize,
	U8,
	U16,
	U32,
	U64,
	Usize,
	F32,
	F64,
	Bool,
	Text,
	Time,
}

impl KindArg {
	/// Label matching the library's kind names.
	pub fn name(self) -> &'static str {
		match self.int_kind() {
			Some(kind) => kind.name(),
			None => match self {
				Self::F32 => "f32",
				Self::F64 => "f64",
				Self::Bool => "bool",
				Self::Text => "text",
				_ => "time",
			},
		}
	}

	/// Integer kind, when this is one.
	pub fn int_kind(self) -> Option<IntKind> {
		Some(match self {
			Self::I8 => IntKind::I8,
			Self::I16 => IntKind::I16,
			Self::I32 => IntKind::I32,
			Self::I64 => IntKind::I64,
			Self::Isize => IntKind::ISIZE,
			Self::U8 => IntKind::U8,
			Self::U16 => IntKind::U16,
			Self::U32 => IntKind::U32,
			Self::U64 => IntKind::U64,
			Self::Usize => IntKind::USIZE,
			Self::F32 | Self::F64 | Self::Bool | Self::Text | Self::Time => return None,
		})
	}
}

/// Presence status selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusArg {
	Present,
	Null,
	Undefined,
}

impl From<StatusArg> for Status {
	fn from(value: StatusArg) -> Self {
		match value {
			StatusArg::Present => Status::Present,
			StatusArg::Null => Status::Null,
			StatusArg::Undefined => Status::Undefined,
		}
	}
}

/// Parse command-line text into a value of the implementing type.
pub(crate) trait Literal: Sized {
	fn parse_literal(text: &str) -> Option<Self>;
}

macro_rules! from_str_literal {
	($($ty:ty),* $(,)?) => {
		$(
			impl Literal for $ty {
				fn parse_literal(text: &str) -> Option<Self> {
					text.trim().parse().ok()
				}
			}
		)*
	};
}

from_str_literal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool);

impl Literal for String {
	fn parse_literal(text: &str) -> Option<Self> {
		Some(text.to_owned())
	}
}

/// Seconds relative to the Unix epoch; negative values precede it.
impl Literal for SystemTime {
	fn parse_literal(text: &str) -> Option<Self> {
		let seconds = f64::parse_literal(text)?;
		let offset = Duration::try_from_secs_f64(seconds.abs()).ok()?;
		if seconds < 0.0 { UNIX_EPOCH.checked_sub(offset) } else { UNIX_EPOCH.checked_add(offset) }
	}
}

macro_rules! int_aliases {
	($($name:ident => $prim:ty),* $(,)?) => {
		$(
			#[doc = concat!("Named alias over `", stringify!($prim), "`.")]
			#[derive(Debug, Default, Clone, Copy, PartialEq)]
			pub(crate) struct $name(pub(crate) $prim);
			pgconv::int_alias!($name => $prim);

			impl Literal for $name {
				fn parse_literal(text: &str) -> Option<Self> {
					<$prim>::parse_literal(text).map(Self)
				}
			}
		)*
	};
}

int_aliases! {
	AliasI8 => i8,
	AliasI16 => i16,
	AliasI32 => i32,
	AliasI64 => i64,
	AliasIsize => isize,
	AliasU8 => u8,
	AliasU16 => u16,
	AliasU32 => u32,
	AliasU64 => u64,
	AliasUsize => usize,
}

macro_rules! scalar_aliases {
	($($name:ident => $prim:ty),* $(,)?) => {
		$(
			#[doc = concat!("Named alias over `", stringify!($prim), "`.")]
			#[derive(Debug, Clone, PartialEq)]
			pub(crate) struct $name(pub(crate) $prim);
			pgconv::scalar_alias!($name => $prim);

			impl Literal for $name {
				fn parse_literal(text: &str) -> Option<Self> {
					<$prim>::parse_literal(text).map(Self)
				}
			}
		)*
	};
}

scalar_aliases! {
	AliasF32 => f32,
	AliasF64 => f64,
	AliasBool => bool,
	AliasText => String,
	AliasTime => SystemTime,
}
