//! Public library API for writing decoded numeric values into caller-owned storage.

/// Presence tags, kind tables, normalization, and value assignment.
pub mod convert;
