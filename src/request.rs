//! Self-contained search request, for running a search across a message
//! boundary (a worker thread, a web worker, a subprocess).
//!
//! The request carries everything the search needs; the response is the
//! ordered list of combinations. The shape is identical whether it is
//! executed in-process or decoded from JSON on the other side.

use serde::{Deserialize, Serialize};

use crate::catalog::{AvailabilityOverrides, Catalog, CatalogItem};
use crate::constraints::ConstraintSet;
use crate::error::BlendError;
use crate::search::{Combination, FlavorWeights, SearchConfig, SearchRunner};

/// One search, fully described.
///
/// # Examples
///
/// ```
/// use berry_blend::request::SearchRequest;
///
/// let request = SearchRequest::from_json(r#"{
///     "items": [
///         {"name": "Oran", "stats": {"flavors": [40, 0, 0, 0, 0], "calories": 20}, "available": 0}
///     ],
///     "availability": {"Oran": 5},
///     "constraints": {"ranges": {"sweet": {"min": 120, "max": 200}}},
///     "config": {"max_units": 5}
/// }"#).unwrap();
///
/// let combos = request.execute().unwrap();
/// assert_eq!(combos.len(), 1);
/// assert_eq!(combos[0].count("Oran"), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Catalog in branch tie-break order.
    pub items: Vec<CatalogItem>,
    /// Quantities applied over the items' own availability.
    pub availability: Option<AvailabilityOverrides>,
    pub constraints: ConstraintSet,
    pub config: SearchConfig,
    /// Per-unit scoring weights.
    pub weights: FlavorWeights,
}

impl SearchRequest {
    pub fn from_json(json: &str) -> Result<Self, BlendError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BlendError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the catalog with availability overrides applied.
    pub fn catalog(&self) -> Catalog {
        let mut catalog: Catalog = self.items.iter().cloned().collect();
        if let Some(overrides) = &self.availability {
            catalog.apply_availability(overrides);
        }
        catalog
    }

    /// Runs the search and returns the combinations, best first.
    pub fn execute(&self) -> Result<Vec<Combination>, BlendError> {
        let result =
            SearchRunner::try_run(&self.catalog(), &self.constraints, &self.weights, &self.config)?;
        Ok(result.into_combinations())
    }
}
