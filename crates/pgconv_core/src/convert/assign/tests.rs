use std::time::SystemTime;

use pgconv_testkit::{IntBounds, int_bounds};

use crate::convert::{AssignError, Bound, IntKind, Numeric, Status, Target, Unsupported, assign, assign_float, assign_int};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Celsius(i32);
crate::int_alias!(Celsius => i32);

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Port(u16);
crate::int_alias!(Port => u16);

fn widen<T>(value: T) -> i128
where
	T: TryInto<i128>,
	<T as TryInto<i128>>::Error: std::fmt::Debug,
{
	value.try_into().expect("widens to i128")
}

fn assert_bounds<T>(bounds: &IntBounds)
where
	T: Target + Default + Copy + TryInto<i128>,
	<T as TryInto<i128>>::Error: std::fmt::Debug,
{
	let mut dst = T::default();
	assign_int(bounds.min_i64(), Status::Present, &mut dst).expect("min fits");
	assert_eq!(widen(dst), i128::from(bounds.min_i64()), "{} min", bounds.name);

	let mut dst = T::default();
	assign_int(bounds.max_i64(), Status::Present, &mut dst).expect("max fits");
	assert_eq!(widen(dst), i128::from(bounds.max_i64()), "{} max", bounds.name);

	if let Some(below) = bounds.below_min() {
		let err = assign_int(below, Status::Present, &mut dst).expect_err("min - 1 should fail");
		assert!(matches!(err, AssignError::Range { value, .. } if value == below), "{}: {err}", bounds.name);
	}
	if let Some(above) = bounds.above_max() {
		let err = assign_int(above, Status::Present, &mut dst).expect_err("max + 1 should fail");
		assert!(
			matches!(err, AssignError::Range { bound: Bound::AboveMax, .. }),
			"{}: {err}",
			bounds.name
		);
	}
	assert_eq!(widen(dst), i128::from(bounds.max_i64()), "{} untouched on failure", bounds.name);
}

#[test]
fn every_width_accepts_its_bounds_and_rejects_one_past() {
	for bounds in int_bounds() {
		match bounds.name {
			"i8" => assert_bounds::<i8>(&bounds),
			"i16" => assert_bounds::<i16>(&bounds),
			"i32" => assert_bounds::<i32>(&bounds),
			"i64" => assert_bounds::<i64>(&bounds),
			"isize" => assert_bounds::<isize>(&bounds),
			"u8" => assert_bounds::<u8>(&bounds),
			"u16" => assert_bounds::<u16>(&bounds),
			"u32" => assert_bounds::<u32>(&bounds),
			"u64" => assert_bounds::<u64>(&bounds),
			"usize" => assert_bounds::<usize>(&bounds),
			other => panic!("unexpected primitive {other}"),
		}
	}
}

#[test]
fn negative_values_never_fit_unsigned_destinations() {
	for value in [-1, -300, i64::from(i32::MIN), i64::MIN] {
		let mut a = 0_u8;
		let mut b = 0_u16;
		let mut c = 0_u32;
		let mut d = 0_u64;
		let mut e = 0_usize;
		let mut f = Port(0);
		let dsts: [&mut dyn Target; 6] = [&mut a, &mut b, &mut c, &mut d, &mut e, &mut f];
		for dst in dsts {
			let err = assign_int(value, Status::Present, dst).expect_err("negative into unsigned");
			assert!(matches!(err, AssignError::Range { bound: Bound::BelowZero, .. }), "{err}");
		}
	}
}

#[test]
fn three_hundred_fits_i32_but_not_u8() {
	let mut small = 0_u8;
	let err = assign_int(300, Status::Present, &mut small).expect_err("300 overflows u8");
	assert_eq!(
		err,
		AssignError::Range {
			value: 300,
			bound: Bound::AboveMax,
			kind: IntKind::U8,
			target: "u8",
		}
	);
	assert_eq!(err.to_string(), "300 is greater than maximum value for u8");
	assert_eq!(small, 0);

	let mut wide = 0_i32;
	assign(Numeric::Int(300), Status::Present, &mut wide).expect("300 fits i32");
	assert_eq!(wide, 300);
}

#[test]
fn range_messages_name_bound_and_kind() {
	let mut unsigned = 0_u16;
	let err = assign_int(-1, Status::Present, &mut unsigned).expect_err("negative");
	assert_eq!(err.to_string(), "-1 is less than zero for u16");

	let mut signed = 0_i8;
	let err = assign_int(-129, Status::Present, &mut signed).expect_err("below i8");
	assert_eq!(err.to_string(), "-129 is less than minimum value for i8");
}

#[test]
fn integral_floats_store_into_integer_destinations() {
	let mut dst = 0_i32;
	assign_float(3.0, Status::Present, &mut dst).expect("3.0 is integral");
	assert_eq!(dst, 3);

	let mut dst = 0_i64;
	assign_float(-9_007_199_254_740_992.0, Status::Present, &mut dst).expect("exact in f64");
	assert_eq!(dst, -9_007_199_254_740_992);

	let mut dst = 0_i64;
	assign_float(-9_223_372_036_854_775_808.0, Status::Present, &mut dst).expect("i64::MIN is exact");
	assert_eq!(dst, i64::MIN);
}

#[test]
fn fractional_floats_are_rejected_for_integers() {
	let mut dst = 0_i32;
	let err = assign_float(3.5, Status::Present, &mut dst).expect_err("fraction");
	assert!(matches!(
		err,
		AssignError::UnsupportedTarget {
			reason: Unsupported::NotIntegral,
			target: "i32",
			..
		}
	));
	assert_eq!(err.to_string(), "cannot assign non-integral value 3.5 into integer destination i32");
	assert_eq!(dst, 0);
}

#[test]
fn floats_outside_i64_domain_are_rejected() {
	for value in [9_223_372_036_854_775_808.0, 1e20, -1e20, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
		let mut dst = 0_u64;
		let err = assign_float(value, Status::Present, &mut dst).expect_err("outside i64 domain");
		assert!(matches!(err, AssignError::UnsupportedTarget { reason: Unsupported::NotIntegral, .. }), "{value}: {err}");
	}
}

#[test]
fn float_into_unsigned_checks_sign_before_width() {
	let mut dst = 0_u8;
	let err = assign_float(-1.0, Status::Present, &mut dst).expect_err("negative");
	assert!(matches!(err, AssignError::Range { bound: Bound::BelowZero, .. }));

	let err = assign_float(256.0, Status::Present, &mut dst).expect_err("too large");
	assert!(matches!(err, AssignError::Range { bound: Bound::AboveMax, .. }));

	let err = assign_float(-1e18, Status::Present, &mut dst).expect_err("large negative");
	assert!(matches!(err, AssignError::Range { bound: Bound::BelowZero, .. }));
}

#[test]
fn float_destinations_store_directly() {
	let mut narrow = 0.0_f32;
	assign_float(0.1, Status::Present, &mut narrow).expect("f32 store");
	assert_eq!(narrow, 0.1_f32);

	let mut huge = 0.0_f32;
	assign_float(1e300, Status::Present, &mut huge).expect("narrowing never errors");
	assert!(huge.is_infinite());

	let mut wide = 0.0_f64;
	assign(Numeric::Float(-2.25), Status::Present, &mut wide).expect("f64 store");
	assert_eq!(wide, -2.25);
}

#[test]
fn optional_destination_allocates_then_clears() {
	let mut dst: Option<i32> = None;
	assign_int(300, Status::Present, &mut dst).expect("allocates");
	assert_eq!(dst, Some(300));

	assign_int(0, Status::Null, &mut dst).expect("clears");
	assert_eq!(dst, None);
	assign_int(0, Status::Null, &mut dst).expect("clear is idempotent");
	assert_eq!(dst, None);

	assign_float(2.0, Status::Present, &mut dst).expect("float allocates");
	assert_eq!(dst, Some(2));
	assign_float(0.0, Status::Undefined, &mut dst).expect("undefined clears");
	assert_eq!(dst, None);
}

#[test]
fn boxed_optional_destination_allocates_on_write() {
	let mut dst: Option<Box<u8>> = None;
	assign_int(200, Status::Present, &mut dst).expect("allocates box");
	assert_eq!(dst.as_deref(), Some(&200));

	assign_int(7, Status::Present, &mut dst).expect("reuses allocation");
	assert_eq!(dst.as_deref(), Some(&7));
}

#[test]
fn nested_optional_peels_one_level_per_hop() {
	let mut dst: Option<Option<i16>> = None;
	assign_int(-5, Status::Present, &mut dst).expect("allocates both levels");
	assert_eq!(dst, Some(Some(-5)));

	assign_int(0, Status::Null, &mut dst).expect("clears outer level");
	assert_eq!(dst, None);
}

#[test]
fn failed_write_leaves_no_allocation_behind() {
	let mut empty: Option<u8> = None;
	assign_int(300, Status::Present, &mut empty).expect_err("overflow");
	assert_eq!(empty, None);

	let mut held: Option<u8> = Some(5);
	assign_int(-1, Status::Present, &mut held).expect_err("negative");
	assert_eq!(held, Some(5));

	let mut nested: Option<Option<i8>> = None;
	assign_float(0.5, Status::Present, &mut nested).expect_err("fraction");
	assert_eq!(nested, None);
}

#[test]
fn absent_source_into_plain_destination_is_not_assignable() {
	let mut dst = 17_i32;
	let err = assign_int(0, Status::Null, &mut dst).expect_err("null into i32");
	assert_eq!(
		err,
		AssignError::NotAssignable {
			status: Status::Null,
			target: "i32",
		}
	);
	assert_eq!(err.to_string(), "cannot assign null value into non-optional i32");
	assert_eq!(dst, 17);

	let mut float = 1.0_f64;
	let err = assign_float(0.0, Status::Undefined, &mut float).expect_err("undefined into f64");
	assert!(matches!(err, AssignError::NotAssignable { status: Status::Undefined, .. }));
}

#[test]
fn alias_destinations_use_width_and_sign() {
	let mut temp = Celsius::default();
	assign_int(-40, Status::Present, &mut temp).expect("fits i32");
	assert_eq!(temp, Celsius(-40));

	let err = assign_int(i64::MAX, Status::Present, &mut temp).expect_err("overflows i32");
	let AssignError::Range { bound, kind, target, .. } = err else {
		panic!("expected range error, got {err}");
	};
	assert_eq!(bound, Bound::AboveMax);
	assert_eq!(kind, IntKind::I32);
	assert!(target.ends_with("Celsius"), "unexpected target label {target}");
	assert_eq!(temp, Celsius(-40));

	let mut port = Port::default();
	assign_float(5432.0, Status::Present, &mut port).expect("integral float into alias");
	assert_eq!(port, Port(5432));
	let err = assign_int(65_536, Status::Present, &mut port).expect_err("overflows u16");
	assert_eq!(port, Port(5432));
	let message = err.to_string();
	assert!(message.starts_with("65536 is greater than maximum value for "), "{message}");
	assert!(message.ends_with("::Port (u16)"), "{message}");

	let err = assign_float(-1.0, Status::Present, &mut port).expect_err("negative into unsigned alias");
	assert!(err.to_string().ends_with("Port (u16)"), "{err}");
}

#[test]
fn optional_alias_destination() {
	let mut dst: Option<Port> = None;
	assign_int(80, Status::Present, &mut dst).expect("allocates alias");
	assert_eq!(dst, Some(Port(80)));
	assign_int(0, Status::Undefined, &mut dst).expect("clears alias");
	assert_eq!(dst, None);
}

#[test]
fn unsupported_destinations_are_rejected() {
	let mut flag = false;
	let err = assign_int(1, Status::Present, &mut flag).expect_err("bool");
	assert_eq!(err.to_string(), "cannot assign 1 into bool");

	let mut text = String::new();
	let err = assign_float(1.5, Status::Present, &mut text).expect_err("string");
	assert!(matches!(err, AssignError::UnsupportedTarget { reason: Unsupported::Kind, target: "String", .. }));

	let mut at = SystemTime::UNIX_EPOCH;
	assign_int(0, Status::Present, &mut at).expect_err("time");

	let mut float = 0.0_f64;
	let err = assign_int(2, Status::Present, &mut float).expect_err("integer path has no float rule");
	assert!(matches!(err, AssignError::UnsupportedTarget { value: Numeric::Int(2), target: "f64", .. }));
}

#[test]
fn boxed_destination_writes_through() {
	let mut dst: Box<dyn Target> = Box::new(0_u32);
	assign_int(4_000_000_000, Status::Present, &mut dst).expect("fits u32");

	let mut plain = Box::new(0_i8);
	assign_int(-8, Status::Present, &mut plain).expect("fits i8");
	assert_eq!(*plain, -8);
}
