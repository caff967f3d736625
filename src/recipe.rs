//! Summaries of finished combinations.
//!
//! A blend's star tier raises its effective calories: each star adds 10%
//! on top of the raw calorie total, rounded down.

use crate::catalog::Catalog;
use crate::constraints::star_tier;
use crate::flavor::FlavorVector;
use crate::search::Combination;

/// Aggregate view of one combination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeSummary {
    /// Summed flavors and raw calories.
    pub totals: FlavorVector,
    /// Star tier of the totals.
    pub stars: u8,
    /// Calories after the star bonus.
    pub calories: u32,
    /// `(berry, units)` in combination order.
    pub items: Vec<(String, u32)>,
}

impl RecipeSummary {
    /// Summarises `combination` against `catalog`.
    ///
    /// Berries missing from the catalog are listed but add nothing.
    ///
    /// ```
    /// use berry_blend::catalog::{Catalog, CatalogItem};
    /// use berry_blend::flavor::{Flavor, FlavorVector};
    /// use berry_blend::recipe::RecipeSummary;
    /// use berry_blend::search::Combination;
    ///
    /// let catalog = Catalog::new().with_item(CatalogItem::new(
    ///     "Oran",
    ///     FlavorVector::zero().with_flavor(Flavor::Sweet, 50).with_calories(33),
    ///     8,
    /// ));
    /// let summary = RecipeSummary::of(&Combination::new().with("Oran", 3), &catalog);
    /// assert_eq!(summary.stars, 1);
    /// assert_eq!(summary.calories, 108); // floor(99 * 1.1)
    /// ```
    pub fn of(combination: &Combination, catalog: &Catalog) -> Self {
        let totals = combination
            .iter()
            .filter_map(|(name, &count)| catalog.get(name).map(|item| (item, count)))
            .fold(FlavorVector::zero(), |acc, (item, count)| {
                acc.add_scaled(&item.stats, count)
            });
        let stars = star_tier(&totals);

        Self {
            totals,
            stars,
            calories: boosted_calories(totals.calories(), stars),
            items: combination
                .iter()
                .map(|(name, &count)| (name.clone(), count))
                .collect(),
        }
    }
}

/// `floor(calories * (1 + stars / 10))`, in integer arithmetic.
fn boosted_calories(calories: u32, stars: u8) -> u32 {
    let boosted = u64::from(calories) * (10 + u64::from(stars)) / 10;
    u32::try_from(boosted).unwrap_or(u32::MAX)
}
