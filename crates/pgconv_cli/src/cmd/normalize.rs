use std::time::SystemTime;

use pgconv::convert::{Peeled, Reflect, Value, normalize, resolve};

use crate::cmd::kind::{
	AliasBool, AliasF32, AliasF64, AliasI8, AliasI16, AliasI32, AliasI64, AliasIsize, AliasText, AliasTime, AliasU8, AliasU16, AliasU32, AliasU64,
	AliasUsize, KindArg, Literal,
};
use crate::cmd::util::{RenderOptions, emit_json, opt_value_text, value_json};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Kind of the input value.
	#[arg(long, value_enum)]
	pub kind: KindArg,
	/// Literal for the input value; instants are epoch seconds.
	#[arg(long, allow_hyphen_values = true, required_unless_present = "nil")]
	pub value: Option<String>,
	/// Declare the input through a named alias over `kind`.
	#[arg(long)]
	pub alias: bool,
	/// Hand the input over behind one level of indirection.
	#[arg(long, conflicts_with = "nil")]
	pub reference: bool,
	/// Hand over an empty reference instead of a value.
	#[arg(long)]
	pub nil: bool,
	#[arg(long)]
	pub json: bool,
}

/// How the input value is wrapped before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrapping {
	/// The value itself.
	Bare,
	/// A non-empty reference to the value.
	Reference,
	/// An empty reference.
	Nil,
}

impl Wrapping {
	fn as_str(self) -> &'static str {
		match self {
			Self::Bare => "bare",
			Self::Reference => "reference",
			Self::Nil => "nil",
		}
	}
}

/// Outcome of a single normalization step.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
	/// No rule applies, the input is canonical, or the reference is empty.
	NotApplicable,
	/// One level of indirection was removed; carries the pointee's canonical value.
	Deref(Option<Value>),
	/// Alias stripped to its canonical value.
	Value(Value),
}

/// Build the requested input and normalize it once, returning the step and the `changed` flag.
pub(crate) fn execute(kind: KindArg, literal: Option<&str>, alias: bool, wrapping: Wrapping) -> Result<(Step, bool)> {
	let input = build_input(kind, literal, alias, wrapping)?;
	Ok(match normalize(input.as_ref()) {
		None => (Step::NotApplicable, false),
		Some((Peeled::Deref(inner), changed)) => (Step::Deref(resolve(inner)), changed),
		Some((Peeled::Value(value), changed)) => (Step::Value(value), changed),
	})
}

fn build_input(kind: KindArg, literal: Option<&str>, alias: bool, wrapping: Wrapping) -> Result<Box<dyn Reflect>> {
	use KindArg::*;

	match (kind, alias) {
		(I8, false) => input::<i8>(kind, literal, wrapping),
		(I16, false) => input::<i16>(kind, literal, wrapping),
		(I32, false) => input::<i32>(kind, literal, wrapping),
		(I64, false) => input::<i64>(kind, literal, wrapping),
		(Isize, false) => input::<isize>(kind, literal, wrapping),
		(U8, false) => input::<u8>(kind, literal, wrapping),
		(U16, false) => input::<u16>(kind, literal, wrapping),
		(U32, false) => input::<u32>(kind, literal, wrapping),
		(U64, false) => input::<u64>(kind, literal, wrapping),
		(Usize, false) => input::<usize>(kind, literal, wrapping),
		(F32, false) => input::<f32>(kind, literal, wrapping),
		(F64, false) => input::<f64>(kind, literal, wrapping),
		(Bool, false) => input::<bool>(kind, literal, wrapping),
		(Text, false) => input::<String>(kind, literal, wrapping),
		(Time, false) => input::<SystemTime>(kind, literal, wrapping),
		(I8, true) => input::<AliasI8>(kind, literal, wrapping),
		(I16, true) => input::<AliasI16>(kind, literal, wrapping),
		(I32, true) => input::<AliasI32>(kind, literal, wrapping),
		(I64, true) => input::<AliasI64>(kind, literal, wrapping),
		(Isize, true) => input::<AliasIsize>(kind, literal, wrapping),
		(U8, true) => input::<AliasU8>(kind, literal, wrapping),
		(U16, true) => input::<AliasU16>(kind, literal, wrapping),
		(U32, true) => input::<AliasU32>(kind, literal, wrapping),
		(U64, true) => input::<AliasU64>(kind, literal, wrapping),
		(Usize, true) => input::<AliasUsize>(kind, literal, wrapping),
		(F32, true) => input::<AliasF32>(kind, literal, wrapping),
		(F64, true) => input::<AliasF64>(kind, literal, wrapping),
		(Bool, true) => input::<AliasBool>(kind, literal, wrapping),
		(Text, true) => input::<AliasText>(kind, literal, wrapping),
		(Time, true) => input::<AliasTime>(kind, literal, wrapping),
	}
}

fn input<T: Reflect + Literal + 'static>(kind: KindArg, literal: Option<&str>, wrapping: Wrapping) -> Result<Box<dyn Reflect>> {
	if wrapping == Wrapping::Nil {
		let empty: Box<dyn Reflect> = Box::new(None::<T>);
		return Ok(empty);
	}

	let literal = literal.ok_or(CliError::MissingValue)?;
	let value = T::parse_literal(literal).ok_or_else(|| CliError::InvalidLiteral {
		kind: kind.name(),
		value: literal.to_owned(),
	})?;

	let boxed: Box<dyn Reflect> = match wrapping {
		Wrapping::Reference => Box::new(Box::new(value)),
		Wrapping::Bare | Wrapping::Nil => Box::new(value),
	};
	Ok(boxed)
}

/// Normalize one value and report whether a rule applied.
pub fn run(args: Args, render: RenderOptions) -> Result<()> {
	let Args {
		kind,
		value,
		alias,
		reference,
		nil,
		json,
	} = args;

	let wrapping = match (reference, nil) {
		(_, true) => Wrapping::Nil,
		(true, false) => Wrapping::Reference,
		(false, false) => Wrapping::Bare,
	};
	let (step, changed) = execute(kind, value.as_deref(), alias, wrapping)?;

	let (result, peeled) = match &step {
		Step::NotApplicable => (None, None),
		Step::Deref(inner) => (Some("deref"), inner.as_ref()),
		Step::Value(value) => (Some("value"), Some(value)),
	};

	let render = RenderOptions { json, ..render };
	if render.json {
		let payload = NormalizeJson {
			kind: kind.name(),
			alias,
			wrapping: wrapping.as_str(),
			applicable: result.is_some(),
			changed,
			result,
			value: peeled.map(value_json),
			value_type: peeled.map(Value::type_label),
		};
		return emit_json(&payload, render);
	}

	println!("kind: {}", kind.name());
	println!("alias: {alias}");
	println!("wrapping: {}", wrapping.as_str());
	println!("applicable: {}", result.is_some());
	println!("changed: {changed}");
	println!("result: {}", result.unwrap_or("-"));
	println!("value: {}", opt_value_text(peeled));

	Ok(())
}

#[derive(serde::Serialize)]
struct NormalizeJson {
	kind: &'static str,
	alias: bool,
	wrapping: &'static str,
	applicable: bool,
	changed: bool,
	result: Option<&'static str>,
	value: Option<serde_json::Value>,
	value_type: Option<&'static str>,
}
