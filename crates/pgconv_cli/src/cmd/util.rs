use std::time::{SystemTime, UNIX_EPOCH};

use pgconv::convert::Value;
use serde::Serialize;

use crate::error::Result;

/// How command output is rendered.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
	/// Emit JSON instead of `key: value` lines.
	pub json: bool,
	/// Indent JSON output.
	pub pretty: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { json: false, pretty: true }
	}
}

/// Print `payload` as JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T, options: RenderOptions) -> Result<()> {
	let text = if options.pretty {
		serde_json::to_string_pretty(payload)?
	} else {
		serde_json::to_string(payload)?
	};
	println!("{text}");
	Ok(())
}

/// JSON form of a canonical value. Instants become epoch seconds.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	use serde_json::Value as Json;

	match value {
		Value::I8(item) => Json::from(*item),
		Value::I16(item) => Json::from(*item),
		Value::I32(item) => Json::from(*item),
		Value::I64(item) => Json::from(*item),
		Value::Isize(item) => Json::from(*item),
		Value::U8(item) => Json::from(*item),
		Value::U16(item) => Json::from(*item),
		Value::U32(item) => Json::from(*item),
		Value::U64(item) => Json::from(*item),
		Value::Usize(item) => Json::from(*item),
		Value::F32(item) => Json::from(*item),
		Value::F64(item) => Json::from(*item),
		Value::Bool(item) => Json::from(*item),
		Value::Text(item) => Json::from(&**item),
		Value::Time(item) => Json::from(epoch_seconds(*item)),
		Value::Seq { items, .. } => Json::Array(items.iter().map(value_json).collect()),
	}
}

/// Human-readable form of a canonical value.
pub(crate) fn value_text(value: &Value) -> String {
	match value {
		Value::I8(item) => item.to_string(),
		Value::I16(item) => item.to_string(),
		Value::I32(item) => item.to_string(),
		Value::I64(item) => item.to_string(),
		Value::Isize(item) => item.to_string(),
		Value::U8(item) => item.to_string(),
		Value::U16(item) => item.to_string(),
		Value::U32(item) => item.to_string(),
		Value::U64(item) => item.to_string(),
		Value::Usize(item) => item.to_string(),
		Value::F32(item) => item.to_string(),
		Value::F64(item) => item.to_string(),
		Value::Bool(item) => item.to_string(),
		Value::Text(item) => format!("{item:?}"),
		Value::Time(item) => format!("{}s", epoch_seconds(*item)),
		Value::Seq { items, .. } => {
			let parts: Vec<String> = items.iter().map(value_text).collect();
			format!("[{}]", parts.join(", "))
		}
	}
}

/// Signed seconds since the Unix epoch.
pub(crate) fn epoch_seconds(instant: SystemTime) -> f64 {
	match instant.duration_since(UNIX_EPOCH) {
		Ok(after) => after.as_secs_f64(),
		Err(before) => -before.duration().as_secs_f64(),
	}
}

/// Render an optional canonical value, `-` when absent.
pub(crate) fn opt_value_text(value: Option<&Value>) -> String {
	match value {
		Some(item) => format!("{} ({})", value_text(item), item.type_label()),
		None => "-".to_owned(),
	}
}
