//! Shared test helpers for workspace crates.

use std::process::Output;

/// Expected bounds of one integer primitive, taken from the primitive's own constants.
#[derive(Debug, Clone, Copy)]
pub struct IntBounds {
	/// Rust spelling of the primitive.
	pub name: &'static str,
	/// Whether the primitive is signed.
	pub signed: bool,
	/// `MIN` widened to `i128`.
	pub min: i128,
	/// `MAX` widened to `i128`.
	pub max: i128,
}

impl IntBounds {
	/// `min - 1`, when it is still an `i64` source value.
	pub fn below_min(&self) -> Option<i64> {
		i64::try_from(self.min - 1).ok()
	}

	/// `max + 1`, when it is still an `i64` source value.
	pub fn above_max(&self) -> Option<i64> {
		i64::try_from(self.max + 1).ok()
	}

	/// `min` as an `i64` source value.
	pub fn min_i64(&self) -> i64 {
		i64::try_from(self.min).unwrap_or(i64::MIN)
	}

	/// `max` clamped to the `i64` source domain.
	pub fn max_i64(&self) -> i64 {
		i64::try_from(self.max).unwrap_or(i64::MAX)
	}
}

macro_rules! bounds {
	($($ty:ty => $signed:expr),* $(,)?) => {
		vec![$(IntBounds {
			name: stringify!($ty),
			signed: $signed,
			min: <$ty>::MIN as i128,
			max: <$ty>::MAX as i128,
		}),*]
	};
}

/// Bounds for every integer primitive a destination can store.
pub fn int_bounds() -> Vec<IntBounds> {
	bounds! {
		i8 => true,
		i16 => true,
		i32 => true,
		i64 => true,
		isize => true,
		u8 => false,
		u16 => false,
		u32 => false,
		u64 => false,
		usize => false,
	}
}

/// Assert a process succeeded and parse its stdout as JSON.
pub fn json_stdout(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Assert a process failed and return its stderr.
pub fn failure_stderr(output: &Output) -> String {
	assert!(!output.status.success(), "command unexpectedly succeeded: {}", String::from_utf8_lossy(&output.stdout));
	String::from_utf8_lossy(&output.stderr).into_owned()
}
