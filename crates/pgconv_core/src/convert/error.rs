use std::fmt;

use thiserror::Error;

use crate::convert::{IntKind, Numeric, Status};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AssignError>;

/// Errors produced while writing a decoded value into a destination.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
	/// Value does not fit the destination's width or signedness.
	#[error("{value} is {bound} for {target}{}", kind_suffix(.kind, .target))]
	Range {
		/// Offending source value.
		value: i64,
		/// Violated bound.
		bound: Bound,
		/// Integer kind the destination stores.
		kind: IntKind,
		/// Destination type label.
		target: &'static str,
	},
	/// Destination kind has no conversion rule for the source value.
	#[error("cannot assign {}{value} into {}{target}", .reason.value_label(), .reason.target_label())]
	UnsupportedTarget {
		/// Source value that could not be written.
		value: Numeric,
		/// Destination type label.
		target: &'static str,
		/// Which rule rejected the write.
		reason: Unsupported,
	},
	/// Non-present source written into a destination that cannot hold "nothing".
	#[error("cannot assign {status} value into non-optional {target}")]
	NotAssignable {
		/// Presence status of the source.
		status: Status,
		/// Destination type label.
		target: &'static str,
	},
}

/// Bound violated by an out-of-range integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
	/// Negative value for an unsigned destination.
	BelowZero,
	/// Value below the destination minimum.
	BelowMin,
	/// Value above the destination maximum.
	AboveMax,
}

impl Bound {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::BelowZero => "less than zero",
			Self::BelowMin => "less than minimum value",
			Self::AboveMax => "greater than maximum value",
		}
	}
}

impl fmt::Display for Bound {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Reason an `UnsupportedTarget` error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
	/// Destination kind has no rule for the source kind at all.
	Kind,
	/// Float source is fractional, non-finite, or outside the `i64` domain.
	NotIntegral,
}

impl AssignError {
	pub(crate) fn range(value: i64, bound: Bound, kind: IntKind, target: &'static str) -> Self {
		Self::Range { value, bound, kind, target }
	}

	pub(crate) fn unsupported(value: Numeric, target: &'static str) -> Self {
		Self::UnsupportedTarget {
			value,
			target,
			reason: Unsupported::Kind,
		}
	}

	pub(crate) fn not_integral(value: f64, target: &'static str) -> Self {
		Self::UnsupportedTarget {
			value: Numeric::Float(value),
			target,
			reason: Unsupported::NotIntegral,
		}
	}
}

/// ` (u16)` when `target` names an alias rather than the bare kind.
fn kind_suffix(kind: &IntKind, target: &str) -> String {
	if kind.name() == target { String::new() } else { format!(" ({})", kind.name()) }
}

impl Unsupported {
	fn value_label(self) -> &'static str {
		match self {
			Self::Kind => "",
			Self::NotIntegral => "non-integral value ",
		}
	}

	fn target_label(self) -> &'static str {
		match self {
			Self::Kind => "",
			Self::NotIntegral => "integer destination ",
		}
	}
}
