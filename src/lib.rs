//! Bounded blend search over a berry catalog.
//!
//! Given berries with per-unit flavor vectors and availability caps, finds
//! multisets of at most N berries whose combined flavors satisfy range,
//! star-tier, and balance constraints, and returns the best-scoring ones
//! that are not supersets of one another.
//!
//! - **Flavor**: the fixed axis set and the [`FlavorVector`](flavor::FlavorVector)
//!   arithmetic.
//! - **Catalog**: berries, CSV ingestion, persisted availability overrides.
//! - **Constraints**: satisfaction, the hopeless pruning test, star tiers.
//! - **Search**: the branch-and-bound runner, its ordering heuristic, and
//!   the bounded skyline result set.
//! - **Recipe**: star-adjusted summaries of finished blends.
//!
//! # Example
//!
//! ```
//! use berry_blend::catalog::Catalog;
//! use berry_blend::constraints::ConstraintSet;
//! use berry_blend::flavor::Flavor;
//! use berry_blend::search::{FlavorWeights, SearchConfig, SearchRunner};
//!
//! let mut catalog = Catalog::from_csv_str(
//!     "Berry,Sweet,Spicy,Sour,Bitter,Fresh,Calories\n\
//!      Cheri,0,40,0,0,10,30\n\
//!      Pecha,40,0,0,0,10,30\n",
//! ).unwrap();
//! catalog.set_available("Cheri", 4);
//! catalog.set_available("Pecha", 4);
//!
//! let constraints = ConstraintSet::new()
//!     .with_range(Flavor::Spicy, 80, 760)
//!     .with_range(Flavor::Sweet, 40, 760);
//!
//! let result = SearchRunner::run(
//!     &catalog,
//!     &constraints,
//!     &FlavorWeights::default(),
//!     &SearchConfig::default(),
//! );
//! assert!(!result.is_empty());
//! ```
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize on value types, JSON helpers, the `request` module.
//! - `parallel`: `SearchRunner::run_parallel` on rayon.
//! - `wasm`: a `findCombinations` wasm-bindgen export.

pub mod catalog;
pub mod constraints;
mod error;
pub mod flavor;
pub mod recipe;
#[cfg(feature = "serde")]
pub mod request;
pub mod search;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::BlendError;
