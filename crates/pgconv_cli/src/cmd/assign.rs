use std::time::UNIX_EPOCH;

use pgconv::convert::{Numeric, Reflect, Status, Target, Value, assign, resolve};

use crate::cmd::kind::{AliasI8, AliasI16, AliasI32, AliasI64, AliasIsize, AliasU8, AliasU16, AliasU32, AliasU64, AliasUsize, KindArg, StatusArg};
use crate::cmd::util::{RenderOptions, emit_json, opt_value_text, value_json};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Integer source value.
	#[arg(long, allow_negative_numbers = true, conflicts_with = "float", required_unless_present = "float")]
	pub int: Option<i64>,
	/// Float source value.
	#[arg(long, allow_negative_numbers = true)]
	pub float: Option<f64>,
	/// Destination kind.
	#[arg(long, value_enum)]
	pub into: KindArg,
	/// Write through a named alias over the destination kind.
	#[arg(long)]
	pub alias: bool,
	/// Wrap the destination in an optional slot.
	#[arg(long)]
	pub optional: bool,
	#[arg(long, value_enum, default_value_t = StatusArg::Present)]
	pub status: StatusArg,
	#[arg(long)]
	pub json: bool,
}

/// One assignment to perform.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Request {
	pub source: Numeric,
	pub status: Status,
	pub into: KindArg,
	pub alias: bool,
	pub optional: bool,
}

impl Request {
	/// Request writing `source` as a present value into a plain `into` slot.
	#[cfg(test)]
	pub(crate) fn present(source: impl Into<Numeric>, into: KindArg) -> Self {
		Self {
			source: source.into(),
			status: Status::Present,
			into,
			alias: false,
			optional: false,
		}
	}

	/// Label of the destination built for this request.
	pub(crate) fn destination_label(&self) -> String {
		let base = if self.alias {
			format!("alias<{}>", self.into.name())
		} else {
			self.into.name().to_owned()
		};
		if self.optional { format!("Option<{base}>") } else { base }
	}
}

/// Build the requested destination, assign into it, and read back what it holds.
///
/// Returns `None` when the destination is an optional slot left empty.
pub(crate) fn execute(request: &Request) -> Result<Option<Value>> {
	use KindArg::*;

	match (request.into, request.alias) {
		(I8, false) => write::<i8>(request),
		(I16, false) => write::<i16>(request),
		(I32, false) => write::<i32>(request),
		(I64, false) => write::<i64>(request),
		(Isize, false) => write::<isize>(request),
		(U8, false) => write::<u8>(request),
		(U16, false) => write::<u16>(request),
		(U32, false) => write::<u32>(request),
		(U64, false) => write::<u64>(request),
		(Usize, false) => write::<usize>(request),
		(I8, true) => write::<AliasI8>(request),
		(I16, true) => write::<AliasI16>(request),
		(I32, true) => write::<AliasI32>(request),
		(I64, true) => write::<AliasI64>(request),
		(Isize, true) => write::<AliasIsize>(request),
		(U8, true) => write::<AliasU8>(request),
		(U16, true) => write::<AliasU16>(request),
		(U32, true) => write::<AliasU32>(request),
		(U64, true) => write::<AliasU64>(request),
		(Usize, true) => write::<AliasUsize>(request),
		(F32, false) => write::<f32>(request),
		(F64, false) => write::<f64>(request),
		(Bool, false) => write::<bool>(request),
		(Text, false) => write::<String>(request),
		(Time, false) if !request.optional => write_into(request, UNIX_EPOCH),
		(Time, false) => Err(CliError::NoOptionalDestination { kind: Time.name() }),
		(kind, true) => Err(CliError::NoAliasDestination { kind: kind.name() }),
	}
}

fn write<T: Target + Reflect + Default>(request: &Request) -> Result<Option<Value>> {
	if !request.optional {
		return write_into(request, T::default());
	}

	let mut slot: Option<T> = None;
	assign(request.source, request.status, &mut slot)?;
	Ok(resolve(&slot))
}

fn write_into<T: Target + Reflect>(request: &Request, mut slot: T) -> Result<Option<Value>> {
	assign(request.source, request.status, &mut slot)?;
	Ok(resolve(&slot))
}

/// Assign a numeric value and print what the destination holds afterwards.
pub fn run(args: Args, render: RenderOptions) -> Result<()> {
	let Args {
		int,
		float,
		into,
		alias,
		optional,
		status,
		json,
	} = args;

	let source = match (int, float) {
		(Some(value), _) => Numeric::Int(value),
		(None, Some(value)) => Numeric::Float(value),
		(None, None) => Numeric::Int(0),
	};
	let request = Request {
		source,
		status: status.into(),
		into,
		alias,
		optional,
	};
	tracing::debug!(target: "pgconv::cli", source = %request.source, status = %request.status, destination = %request.destination_label(), "assign");

	let stored = execute(&request)?;

	let render = RenderOptions { json, ..render };
	if render.json {
		let payload = AssignJson {
			source: match request.source {
				Numeric::Int(value) => serde_json::Value::from(value),
				Numeric::Float(value) => serde_json::Value::from(value),
			},
			status: request.status.as_str(),
			destination: request.destination_label(),
			stored_type: stored.as_ref().map(Value::type_label),
			stored: stored.as_ref().map(value_json),
		};
		return emit_json(&payload, render);
	}

	println!("source: {}", request.source);
	println!("status: {}", request.status);
	println!("destination: {}", request.destination_label());
	println!("stored: {}", opt_value_text(stored.as_ref()));

	Ok(())
}

#[derive(serde::Serialize)]
struct AssignJson {
	source: serde_json::Value,
	status: &'static str,
	destination: String,
	stored: Option<serde_json::Value>,
	stored_type: Option<&'static str>,
}
