//! Boolean-input reconstruction from stored operand trees.
//!
//! A composite object records the operator and the original operand
//! descriptors that produced it. Rebuilding its boolean input from that
//! tree, instead of converting the live composite mesh back into boolean
//! geometry, is what keeps chained operations numerically clean: every
//! rebuild starts from pristine parametric primitives.

pub mod builder;
pub mod materialize;
pub mod types;

pub use builder::{build_boolean_input, operand_to_geometry, rebuild_tree};
pub use materialize::{local_matrix, local_mesh};
pub use types::{CsgError, HandlePool};
