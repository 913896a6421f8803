/// Numeric assignment command.
pub mod assign;
/// Integer kind listing command.
pub mod kinds;
/// One-level normalization command.
pub mod normalize;

pub(crate) mod kind;
pub(crate) mod util;
