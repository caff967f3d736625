//! Combinations, the multiset relation, and per-unit scoring.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::catalog::CatalogItem;
use crate::flavor::Flavor;

/// Partial order used by the result set: "uses no more of anything".
pub trait Multiset {
    /// True if every count in `self` is at most the matching count in
    /// `other` (missing entries count as 0). Equal multisets qualify.
    fn is_submultiset_of(&self, other: &Self) -> bool;
}

/// A multiset of berries: name → positive unit count.
///
/// Zero counts are never stored, so two combinations are equal exactly
/// when they use the same berries in the same quantities.
///
/// # Examples
///
/// ```
/// use berry_blend::search::{Combination, Multiset};
///
/// let small = Combination::new().with("Oran", 2);
/// let large = Combination::new().with("Oran", 2).with("Pecha", 1);
/// assert!(small.is_submultiset_of(&large));
/// assert!(!large.is_submultiset_of(&small));
/// assert_eq!(large.total_units(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Combination(BTreeMap<String, u32>);

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `name` set to `count`; a count of 0 removes it.
    pub fn with(mut self, name: impl Into<String>, count: u32) -> Self {
        let name = name.into();
        if count == 0 {
            self.0.remove(&name);
        } else {
            self.0.insert(name, count);
        }
        self
    }

    /// Units of `name` (0 when absent).
    pub fn count(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Units across all berries.
    pub fn total_units(&self) -> u32 {
        self.0.values().sum()
    }

    /// Distinct berries used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u32> {
        self.0.iter()
    }
}

impl Multiset for Combination {
    fn is_submultiset_of(&self, other: &Self) -> bool {
        self.0
            .iter()
            .all(|(name, &count)| count <= other.count(name))
    }
}

impl FromIterator<(String, u32)> for Combination {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Combination::new(), |combo, (name, count)| {
                let total = combo.count(&name) + count;
                combo.with(name, total)
            })
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = (&'a String, &'a u32);
    type IntoIter = btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A combination and the score it earned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCombination {
    pub combination: Combination,
    pub score: f64,
}

/// Per-unit score of a berry. A combination scores the sum over its units.
///
/// Higher is better. Implemented for any `Fn(&CatalogItem) -> f64`.
pub trait UnitScorer {
    fn unit_score(&self, item: &CatalogItem) -> f64;
}

impl<F> UnitScorer for F
where
    F: Fn(&CatalogItem) -> f64,
{
    fn unit_score(&self, item: &CatalogItem) -> f64 {
        self(item)
    }
}

/// Linear scorer: weighted sum of a berry's flavor values.
///
/// The default weights favour bitter and spicy berries, half-weight fresh,
/// and a third for sweet and sour.
///
/// ```
/// use berry_blend::catalog::CatalogItem;
/// use berry_blend::flavor::{Flavor, FlavorVector};
/// use berry_blend::search::{FlavorWeights, UnitScorer};
///
/// let item = CatalogItem::new("Rawst", FlavorVector::new([30, 0, 30, 10, 4], 0), 1);
/// let score = FlavorWeights::default().unit_score(&item);
/// assert!((score - 32.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlavorWeights {
    weights: [f64; 5],
}

impl FlavorWeights {
    /// All weights zero.
    pub fn zero() -> Self {
        Self { weights: [0.0; 5] }
    }

    pub fn with_weight(mut self, flavor: Flavor, weight: f64) -> Self {
        self.weights[flavor.index()] = weight;
        self
    }

    pub fn weight(&self, flavor: Flavor) -> f64 {
        self.weights[flavor.index()]
    }
}

impl Default for FlavorWeights {
    fn default() -> Self {
        Self::zero()
            .with_weight(Flavor::Sweet, 1.0 / 3.0)
            .with_weight(Flavor::Spicy, 1.0)
            .with_weight(Flavor::Sour, 1.0 / 3.0)
            .with_weight(Flavor::Bitter, 1.0)
            .with_weight(Flavor::Fresh, 0.5)
    }
}

impl UnitScorer for FlavorWeights {
    fn unit_score(&self, item: &CatalogItem) -> f64 {
        Flavor::ALL
            .iter()
            .map(|&flavor| self.weight(flavor) * f64::from(item.stats.flavor(flavor)))
            .sum()
    }
}
