//! Branch-and-bound blend search.
//!
//! Finds multisets of at most `max_units` berries whose aggregate flavors
//! satisfy a [`ConstraintSet`](crate::constraints::ConstraintSet), keeping
//! the best-scoring ones that are not supersets of each other.
//!
//! # Key Components
//!
//! - [`SearchRunner`]: the recursive search driver
//! - [`ResultSet`]: bounded skyline of non-dominated combinations
//! - [`branch_order`]: static berry ranking that fixes exploration order
//! - [`UnitScorer`] / [`FlavorWeights`]: additive per-unit scoring
//! - [`SearchConfig`]: unit cap, result cap, acceptance floor, pruning bound
//!
//! # Design
//!
//! The search is synchronous, single-threaded and allocation-light: the
//! working combination is a dense count vector mutated in place and cloned
//! only when accepted. With the `parallel` feature,
//! [`SearchRunner::run_parallel`] splits the tree by first berry taken.

mod config;
mod ordering;
mod runner;
mod skyline;
mod types;

pub use config::SearchConfig;
pub use ordering::{branch_order, item_utility};
pub use runner::{SearchResult, SearchRunner, SearchStats};
pub use skyline::ResultSet;
pub use types::{Combination, FlavorWeights, Multiset, ScoredCombination, UnitScorer};
