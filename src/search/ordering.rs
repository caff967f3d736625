//! Branch-order heuristic.
//!
//! Each berry gets a static utility: for every flavor it adds to, its
//! per-unit value divided by `max(1, lower bound)`. Berries that push
//! demanding flavors toward their minimums rank first. The order changes
//! only which branches are explored first, never which results are valid.

use crate::catalog::{Catalog, CatalogItem};
use crate::constraints::ConstraintSet;
use crate::flavor::Flavor;

/// Static utility of one berry under the given lower bounds.
pub fn item_utility(item: &CatalogItem, constraints: &ConstraintSet) -> f64 {
    Flavor::ALL
        .iter()
        .filter(|&&flavor| item.stats.flavor(flavor) > 0)
        .map(|&flavor| {
            f64::from(item.stats.flavor(flavor)) / f64::from(constraints.lower_bound(flavor).max(1))
        })
        .sum()
}

/// Catalog positions of every available berry, highest utility first.
///
/// Berries with zero availability are left out. Ties keep catalog order.
pub fn branch_order(catalog: &Catalog, constraints: &ConstraintSet) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.available > 0)
        .map(|(pos, item)| (pos, item_utility(item, constraints)))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(pos, _)| pos).collect()
}
