//! Constraint evaluation over aggregate flavor vectors.
//!
//! A [`ConstraintSet`] answers three questions about a running total:
//!
//! - [`is_satisfied`](ConstraintSet::is_satisfied): does it meet every bound?
//! - [`is_hopeless`](ConstraintSet::is_hopeless): can no extension ever meet
//!   them? Sound but incomplete; used only for pruning.
//! - [`needs`](ConstraintSet::needs): is a flavor still below its minimum?
//!
//! Star tiers come from [`star_tier`], a fixed six-bucket scale over the
//! flavor sum.

mod set;
mod tier;

pub use set::{ConstraintSet, FlavorRange, StarRange};
pub use tier::{star_tier, MAX_STARS, STAR_THRESHOLDS};
