//! Berry catalog: per-unit flavor vectors and availability caps.
//!
//! The catalog is read-only for the duration of a search. Item order is
//! significant: it is the tie-break order when the search ranks berries.
//!
//! # Key Components
//!
//! - [`CatalogItem`]: one berry, its per-unit [`FlavorVector`](crate::flavor::FlavorVector)
//!   and how many units may be used
//! - [`Catalog`]: ordered collection with a name index, CSV loading
//! - [`AvailabilityOverrides`]: persisted per-berry quantities

mod item;
mod loader;
mod overrides;

pub use item::{Catalog, CatalogItem};
pub use overrides::AvailabilityOverrides;
