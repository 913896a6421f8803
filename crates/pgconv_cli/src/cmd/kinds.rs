use pgconv::convert::IntKind;

use crate::cmd::util::{RenderOptions, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print every integer destination kind with its width, sign, and bounds.
pub fn run(args: Args, render: RenderOptions) -> Result<()> {
	let render = RenderOptions { json: args.json, ..render };
	let rows: Vec<KindJson> = IntKind::ALL.into_iter().map(KindJson::from).collect();

	if render.json {
		return emit_json(&rows, render);
	}

	println!("kind\tbits\tsigned\tmin\tmax");
	for row in rows {
		println!("{}\t{}\t{}\t{}\t{}", row.name, row.bits, row.signed, row.min, row.max);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindJson {
	name: &'static str,
	bits: u32,
	signed: bool,
	min: i64,
	max: u64,
}

impl From<IntKind> for KindJson {
	fn from(kind: IntKind) -> Self {
		Self {
			name: kind.name(),
			bits: kind.bits(),
			signed: kind.is_signed(),
			min: kind.min_i64(),
			max: kind.max_u64(),
		}
	}
}
