use crate::convert::{Reflect, ScalarKind, Shape, TypeDesc, Value};

/// Result of stripping one level of indirection or aliasing.
pub enum Peeled<'a> {
	/// One level of indirection removed; the pointee may need further peeling.
	Deref(&'a dyn Reflect),
	/// Canonical primitive or sequence value.
	Value(Value),
}

impl Peeled<'_> {
	/// Canonical value, when this result is not a bare dereference.
	pub fn into_value(self) -> Option<Value> {
		match self {
			Self::Deref(_) => None,
			Self::Value(value) => Some(value),
		}
	}
}

impl std::fmt::Debug for Peeled<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Deref(_) => f.write_str("Deref(..)"),
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}

/// Which value categories a normalizer entry point accepts.
#[derive(Debug, Clone, Copy)]
enum Domain {
	Any,
	Number,
	Bool,
	Ptr,
	Time,
	Slice,
}

impl Domain {
	fn accepts_scalar(self, kind: ScalarKind) -> bool {
		match self {
			Self::Any => true,
			Self::Number => kind.is_number_like(),
			Self::Bool => kind == ScalarKind::Bool,
			Self::Time => kind == ScalarKind::Time,
			Self::Ptr | Self::Slice => false,
		}
	}

	fn accepts_seq(self) -> bool {
		matches!(self, Self::Any | Self::Slice)
	}
}

/// Strip one level of indirection or aliasing from any supported value.
///
/// Returns `None` when the value is already canonical, is an empty reference,
/// or has no normalization rule.
pub fn normalize(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Any)
}

/// Normalize toward a value convertible to a fixed-width integer or float.
///
/// Text is accepted so callers can parse numeric strings.
pub fn underlying_number(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Number)
}

/// Normalize toward a boolean.
pub fn underlying_bool(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Bool)
}

/// Dereference one level of indirection.
pub fn underlying_ptr(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Ptr)
}

/// Normalize toward an instant in time.
pub fn underlying_time(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Time)
}

/// Normalize a sequence that is itself a named alias or whose element type is one.
pub fn underlying_slice(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	peel(val, Domain::Slice)
}

/// Dereference a reference to a sequence and canonicalize its type in one step.
///
/// `changed` is `false` when the sequence behind the reference was already
/// canonical, so the pointee can be used as-is.
pub fn underlying_ptr_slice(val: &dyn Reflect) -> Option<(Peeled<'_>, bool)> {
	let Shape::Ref(Some(inner)) = val.shape() else {
		return None;
	};
	let Shape::Seq { elem, items, alias } = inner.shape() else {
		return None;
	};
	let seq = canonical_seq(elem, &items)?;
	Some((Peeled::Value(seq), alias || elem.alias))
}

/// Peel indirection and aliasing until a canonical value is reached.
///
/// Returns `None` on an empty reference or a value with no normalization rule.
pub fn resolve(val: &dyn Reflect) -> Option<Value> {
	let mut current = val;
	loop {
		match current.shape() {
			Shape::Ref(Some(inner)) => current = inner,
			Shape::Ref(None) | Shape::Opaque => return None,
			Shape::Scalar { value, .. } => return Some(value),
			Shape::Seq { elem, items, .. } => return canonical_seq(elem, &items),
		}
	}
}

fn peel(val: &dyn Reflect, domain: Domain) -> Option<(Peeled<'_>, bool)> {
	match val.shape() {
		Shape::Ref(None) => None,
		Shape::Ref(Some(inner)) => Some((Peeled::Deref(inner), true)),
		Shape::Scalar { value, alias } => {
			let kind = value.scalar_kind()?;
			if !alias || !domain.accepts_scalar(kind) {
				return None;
			}
			Some((Peeled::Value(value), true))
		}
		Shape::Seq { elem, items, alias } => {
			if !(alias || elem.alias) || !domain.accepts_seq() {
				return None;
			}
			let seq = canonical_seq(elem, &items)?;
			Some((Peeled::Value(seq), true))
		}
		Shape::Opaque => None,
	}
}

fn canonical_seq(elem: TypeDesc, items: &[&dyn Reflect]) -> Option<Value> {
	let kind = elem.scalar?;
	let mut out = Vec::with_capacity(items.len());
	for item in items {
		let Shape::Scalar { value, .. } = item.shape() else {
			return None;
		};
		out.push(value);
	}
	Some(Value::Seq { elem: kind, items: out })
}
