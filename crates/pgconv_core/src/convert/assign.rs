use tracing::{debug, trace};

use crate::convert::{AssignError, Dest, Numeric, OptionalTarget, Result, Status, Target};

/// `2^63`, the first float above the `i64` domain.
const I64_DOMAIN_END: f64 = 9_223_372_036_854_775_808.0;

/// Write a numeric source value into `dst`, dispatching on the numeric kind.
pub fn assign(source: Numeric, status: Status, dst: &mut dyn Target) -> Result<()> {
	match source {
		Numeric::Int(value) => assign_int(value, status, dst),
		Numeric::Float(value) => assign_float(value, status, dst),
	}
}

/// Write an `i64` source value into `dst`.
///
/// Plain and aliased integer destinations are range checked against their
/// width and signedness. Optional destinations are allocated on demand when
/// the source is present and cleared otherwise.
pub fn assign_int(value: i64, status: Status, dst: &mut dyn Target) -> Result<()> {
	if !status.is_present() {
		return clear_optional(status, dst);
	}

	match dst.target() {
		Dest::Int(slot) => {
			let kind = slot.kind();
			kind.check(value).map_err(|bound| AssignError::range(value, bound, kind, kind.name()))?;
			slot.store(value);
			Ok(())
		}
		Dest::Alias(alias) => {
			let kind = alias.int_kind();
			kind.check(value)
				.map_err(|bound| AssignError::range(value, bound, kind, alias.type_name()))?;
			alias.store(value);
			Ok(())
		}
		Dest::Optional(slot) => with_allocated(slot, |inner| assign_int(value, status, inner)),
		other => {
			debug!(target: "pgconv::assign", value, target_type = other.type_name(), "no integer conversion rule");
			Err(AssignError::unsupported(Numeric::Int(value), other.type_name()))
		}
	}
}

/// Write an `f64` source value into `dst`.
///
/// Float destinations are stored directly (`f32` rounds, never errors).
/// Integer destinations accept only values that survive a round trip through
/// `i64` unchanged, and then follow [`assign_int`].
pub fn assign_float(value: f64, status: Status, dst: &mut dyn Target) -> Result<()> {
	if !status.is_present() {
		return clear_optional(status, dst);
	}

	let integral = match dst.target() {
		Dest::Float(slot) => {
			slot.store(value);
			return Ok(());
		}
		Dest::Optional(slot) => return with_allocated(slot, |inner| assign_float(value, status, inner)),
		target @ (Dest::Int(_) | Dest::Alias(_)) => match exact_i64(value) {
			Some(integral) => integral,
			None => return Err(AssignError::not_integral(value, target.type_name())),
		},
		Dest::Unsupported(name) => {
			debug!(target: "pgconv::assign", value, target_type = name, "no float conversion rule");
			return Err(AssignError::unsupported(Numeric::Float(value), name));
		}
	};

	assign_int(integral, status, dst)
}

/// Truncate `value` to `i64` when doing so loses nothing.
fn exact_i64(value: f64) -> Option<i64> {
	// Also rejects NaN.
	if !(-I64_DOMAIN_END..I64_DOMAIN_END).contains(&value) {
		return None;
	}
	let truncated = value as i64;
	(truncated as f64 == value).then_some(truncated)
}

/// Run `write` against the inner destination of `slot`, allocating it first.
///
/// A slot allocated here is cleared again when the write fails, so a rejected
/// value never leaves a zero-valued allocation behind. Pointer-based decoders
/// typically keep that allocation; callers relying on it must allocate first.
fn with_allocated(slot: &mut dyn OptionalTarget, write: impl FnOnce(&mut dyn Target) -> Result<()>) -> Result<()> {
	let allocated = !slot.is_allocated();
	if allocated {
		trace!(target: "pgconv::assign", slot = slot.type_name(), "allocating optional destination");
	}

	let result = write(slot.allocate());
	if result.is_err() && allocated {
		slot.clear();
	}
	result
}

fn clear_optional(status: Status, dst: &mut dyn Target) -> Result<()> {
	match dst.target() {
		Dest::Optional(slot) => {
			trace!(target: "pgconv::assign", %status, slot = slot.type_name(), "clearing optional destination");
			slot.clear();
			Ok(())
		}
		other => Err(AssignError::NotAssignable {
			status,
			target: other.type_name(),
		}),
	}
}

#[cfg(test)]
mod tests;
