use pgconv::convert::AssignError;
use thiserror::Error;

/// Errors surfaced by `pgconv` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// The assigner rejected the write.
	#[error(transparent)]
	Assign(#[from] AssignError),
	/// Only integer kinds have writable alias destinations.
	#[error("aliases over {kind} are not assignment destinations")]
	NoAliasDestination {
		/// Requested destination kind.
		kind: &'static str,
	},
	/// The kind has no zero value to allocate an optional slot with.
	#[error("{kind} has no optional destination")]
	NoOptionalDestination {
		/// Requested destination kind.
		kind: &'static str,
	},
	/// `--value` could not be parsed as the requested kind.
	#[error("invalid {kind} literal: {value}")]
	InvalidLiteral {
		/// Requested value kind.
		kind: &'static str,
		/// Raw command-line text.
		value: String,
	},
	/// `--value` was required for a non-empty input.
	#[error("--value is required unless --nil is given")]
	MissingValue,
	/// JSON output could not be encoded.
	#[error("failed to encode json output: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CliError>;
