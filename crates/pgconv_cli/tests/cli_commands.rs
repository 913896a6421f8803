#![allow(missing_docs)]

use std::process::{Command, Output};

use pgconv_testkit::{failure_stderr, int_bounds, json_stdout};

fn run_pgconv(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pgconv"))
		.args(args)
		.env_remove("PGCONV_LOG")
		.output()
		.expect("pgconv command executes")
}

#[test]
fn assign_json_reports_stored_value() {
	let json = json_stdout(&run_pgconv(&["assign", "--int", "300", "--into", "i32", "--json"]));

	assert_eq!(json["source"], 300);
	assert_eq!(json["status"], "present");
	assert_eq!(json["destination"], "i32");
	assert_eq!(json["stored"], 300);
	assert_eq!(json["stored_type"], "i32");
}

#[test]
fn assign_out_of_range_exits_with_error() {
	let stderr = failure_stderr(&run_pgconv(&["assign", "--int", "300", "--into", "u8"]));
	assert!(stderr.contains("error: 300 is greater than maximum value for u8"), "{stderr}");
}

#[test]
fn assign_negative_into_unsigned_reports_sign_first() {
	let stderr = failure_stderr(&run_pgconv(&["assign", "--int=-1", "--into", "u64"]));
	assert!(stderr.contains("error: -1 is less than zero for u64"), "{stderr}");
}

#[test]
fn assign_null_into_optional_leaves_it_empty() {
	let json = json_stdout(&run_pgconv(&["assign", "--int", "5", "--into", "i16", "--optional", "--status", "null", "--json"]));

	assert_eq!(json["destination"], "Option<i16>");
	assert_eq!(json["status"], "null");
	assert!(json["stored"].is_null());
}

#[test]
fn assign_float_into_alias() {
	let json = json_stdout(&run_pgconv(&["assign", "--float", "42", "--into", "u16", "--alias", "--compact", "--json"]));

	assert_eq!(json["destination"], "alias<u16>");
	assert_eq!(json["stored"], 42);
	assert_eq!(json["stored_type"], "u16");
}

#[test]
fn assign_requires_exactly_one_source() {
	let stderr = failure_stderr(&run_pgconv(&["assign", "--into", "i8"]));
	assert!(stderr.contains("--int"), "{stderr}");

	failure_stderr(&run_pgconv(&["assign", "--int", "1", "--float", "1", "--into", "i8"]));
}

#[test]
fn normalize_alias_reports_bare_value() {
	let json = json_stdout(&run_pgconv(&["normalize", "--kind", "i32", "--value", "7", "--alias", "--json"]));

	assert_eq!(json["applicable"], true);
	assert_eq!(json["changed"], true);
	assert_eq!(json["result"], "value");
	assert_eq!(json["value"], 7);
	assert_eq!(json["value_type"], "i32");
}

#[test]
fn normalize_canonical_and_nil_are_not_applicable() {
	for args in [
		&["normalize", "--kind", "i32", "--value", "7", "--json"][..],
		&["normalize", "--kind", "text", "--nil", "--alias", "--json"][..],
	] {
		let json = json_stdout(&run_pgconv(args));
		assert_eq!(json["applicable"], false);
		assert_eq!(json["changed"], false);
		assert!(json["result"].is_null());
		assert!(json["value"].is_null());
	}
}

#[test]
fn normalize_reference_dereferences_once() {
	let json = json_stdout(&run_pgconv(&["normalize", "--kind", "f64", "--value=-2.5", "--reference", "--json"]));

	assert_eq!(json["wrapping"], "reference");
	assert_eq!(json["result"], "deref");
	assert_eq!(json["value"], -2.5);
}

#[test]
fn kinds_json_matches_primitive_bounds() {
	let json = json_stdout(&run_pgconv(&["kinds", "--json"]));
	let rows = json.as_array().expect("kinds is an array");
	let expected = int_bounds();
	assert_eq!(rows.len(), expected.len());

	for bounds in expected {
		let row = rows.iter().find(|row| row["name"] == bounds.name).expect("kind is listed");
		assert_eq!(row["signed"], bounds.signed, "{}", bounds.name);
		assert_eq!(row["min"], bounds.min_i64(), "{}", bounds.name);
		assert_eq!(row["max"].as_u64().map(i128::from), Some(bounds.max), "{}", bounds.name);
	}
}

#[test]
fn trace_logging_reports_optional_allocation() {
	let output = run_pgconv(&["--log-level", "trace", "assign", "--int", "1", "--into", "u8", "--optional"]);
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(output.status.success());
	assert!(stdout.contains("stored: 1 (u8)"), "{stdout}");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("allocating optional destination"), "{stderr}");
}

#[test]
fn unknown_log_level_is_rejected() {
	let stderr = failure_stderr(&run_pgconv(&["--log-level", "loud", "kinds"]));
	assert!(stderr.contains("unknown log level"), "{stderr}");
}
