//! Log level selection and subscriber installation.

use std::env;
use std::fmt;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "PGCONV_LOG";

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
	/// Errors only.
	Error,
	/// Warnings and errors.
	Warn,
	/// Informational events.
	Info,
	/// Rejected assignments and other diagnostics.
	Debug,
	/// Optional-slot allocation and clearing.
	Trace,
}

impl LogLevel {
	/// Level used when neither the flag nor the environment selects one.
	pub const DEFAULT: Self = Self::Warn;

	/// Parse a level name, case-insensitively.
	pub fn parse(text: &str) -> Option<Self> {
		match text.trim().to_ascii_lowercase().as_str() {
			"error" | "err" => Some(Self::Error),
			"warn" | "warning" => Some(Self::Warn),
			"info" => Some(Self::Info),
			"debug" => Some(Self::Debug),
			"trace" | "verbose" => Some(Self::Trace),
			_ => None,
		}
	}

	/// Matching `tracing` level.
	pub fn as_tracing_level(self) -> tracing::Level {
		match self {
			Self::Error => tracing::Level::ERROR,
			Self::Warn => tracing::Level::WARN,
			Self::Info => tracing::Level::INFO,
			Self::Debug => tracing::Level::DEBUG,
			Self::Trace => tracing::Level::TRACE,
		}
	}

	/// Pick the flag value, then the environment value, then [`LogLevel::DEFAULT`].
	///
	/// An unparsable environment value is ignored.
	pub fn resolve(flag: Option<Self>, env_value: Option<&str>) -> Self {
		flag.or_else(|| env_value.and_then(Self::parse)).unwrap_or(Self::DEFAULT)
	}

	/// Resolve against the process environment.
	pub fn from_flag_or_env(flag: Option<Self>) -> Self {
		let env_value = env::var_os(LOG_ENV).map(|value| value.to_string_lossy().into_owned());
		Self::resolve(flag, env_value.as_deref())
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = match self {
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		};
		f.write_str(text)
	}
}

/// Install a compact stderr subscriber at `level`.
///
/// Only the first call per process has an effect.
pub fn init(level: LogLevel) {
	use std::io::IsTerminal;
	use std::sync::OnceLock;

	static INITIALISED: OnceLock<()> = OnceLock::new();

	let _ = INITIALISED.get_or_init(|| {
		let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
		let subscriber = tracing_subscriber::fmt()
			.with_max_level(level.as_tracing_level())
			.with_ansi(use_ansi)
			.with_writer(std::io::stderr)
			.with_target(true)
			.with_level(true)
			.compact()
			.finish();
		let _ = tracing::subscriber::set_global_default(subscriber);
	});
}
