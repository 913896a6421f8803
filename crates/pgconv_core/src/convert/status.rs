use std::fmt;

/// Presence tag paired with every decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
	/// No value was ever set.
	#[default]
	Undefined,
	/// Value is known to be empty.
	Null,
	/// A usable value accompanies this tag.
	Present,
}

impl Status {
	/// Whether a payload may be read.
	pub fn is_present(self) -> bool {
		self == Self::Present
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Undefined => "undefined",
			Self::Null => "null",
			Self::Present => "present",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
