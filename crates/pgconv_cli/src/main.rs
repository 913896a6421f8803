#![allow(missing_docs)]

use clap::{Parser, Subcommand};

use crate::cmd::util::RenderOptions;
use crate::logging::LogLevel;

mod cmd;
mod error;
mod logging;

#[derive(Parser)]
#[command(name = "pgconv", about = "Decoded-value assignment and type normalization tools")]
struct Cli {
	/// Log verbosity: error, warn, info, debug or trace. Falls back to PGCONV_LOG.
	#[arg(long, global = true, value_parser = parse_log_level)]
	log_level: Option<LogLevel>,
	/// Print JSON on a single line.
	#[arg(long, global = true)]
	compact: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write a numeric value into a destination of the requested kind.
	Assign(cmd::assign::Args),
	/// Strip one level of aliasing or indirection from a value.
	Normalize(cmd::normalize::Args),
	/// List integer destination kinds with their bounds.
	Kinds(cmd::kinds::Args),
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
	LogLevel::parse(value).ok_or_else(|| format!("unknown log level `{value}`"))
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	let level = LogLevel::from_flag_or_env(cli.log_level);
	logging::init(level);
	tracing::debug!(target: "pgconv::cli", %level, "logging initialised");

	let render = RenderOptions {
		pretty: !cli.compact,
		..RenderOptions::default()
	};

	match cli.command {
		Commands::Assign(args) => cmd::assign::run(args, render),
		Commands::Normalize(args) => cmd::normalize::run(args, render),
		Commands::Kinds(args) => cmd::kinds::run(args, render),
	}
}
