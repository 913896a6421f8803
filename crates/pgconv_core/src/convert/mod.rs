mod assign;
mod error;
mod kind;
mod normalize;
mod reflect;
mod status;
mod target;
mod value;

/// Numeric assignment entry points.
pub use assign::{assign, assign_float, assign_int};
/// Error and result aliases.
pub use error::{AssignError, Bound, Result, Unsupported};
/// Integer and float kind tables.
pub use kind::{FloatWidth, IntKind, IntWidth, ScalarKind, Signedness};
/// One-level normalization entry points.
pub use normalize::{
	Peeled, normalize, resolve, underlying_bool, underlying_number, underlying_ptr, underlying_ptr_slice, underlying_slice, underlying_time,
};
/// Runtime shape description for normalizable values.
pub use reflect::{Reflect, Shape, TypeDesc};
/// Presence tag attached to decoded values.
pub use status::Status;
/// Writable destination capabilities.
pub use target::{Dest, FloatSlot, IntSlot, IntTarget, OptionalTarget, Target};
#[doc(hidden)]
pub use target::IntPrimitive;
/// Canonical value model.
pub use value::{Numeric, Value};
