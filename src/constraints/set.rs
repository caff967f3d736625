//! Constraint set definition and evaluation.

use crate::flavor::{Flavor, FlavorVector};

use super::tier::{star_tier, MAX_STARS};

/// Inclusive bound on one flavor axis.
///
/// `min > max` is allowed and simply never satisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlavorRange {
    pub min: u32,
    pub max: u32,
}

impl FlavorRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive star tier bound, both ends within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarRange {
    pub min: u8,
    pub max: u8,
}

impl StarRange {
    /// Creates a range, clamping both ends to the tier scale.
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            min: min.min(MAX_STARS),
            max: max.min(MAX_STARS),
        }
    }

    pub fn contains(&self, tier: u8) -> bool {
        self.min <= tier && tier <= self.max
    }
}

impl Default for StarRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: MAX_STARS,
        }
    }
}

/// Bounds a blend must meet: per-flavor ranges, a star range, and an
/// optional balance pair.
///
/// A flavor without a range has no bound of its own but still counts
/// toward the balance and star checks.
///
/// # Examples
///
/// ```
/// use berry_blend::constraints::ConstraintSet;
/// use berry_blend::flavor::{Flavor, FlavorVector};
///
/// let constraints = ConstraintSet::new()
///     .with_range(Flavor::Sweet, 100, 200)
///     .with_star_range(1, 5);
///
/// let total = FlavorVector::zero().with_flavor(Flavor::Sweet, 150);
/// assert!(constraints.is_satisfied(&total));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ConstraintDoc", into = "ConstraintDoc"))]
pub struct ConstraintSet {
    ranges: [Option<FlavorRange>; 5],
    stars: StarRange,
    balance: Option<(Flavor, Flavor)>,
}

/// Serialized shape: ranges keyed by flavor name.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ConstraintDoc {
    #[serde(default)]
    ranges: std::collections::BTreeMap<Flavor, FlavorRange>,
    #[serde(default)]
    stars: StarRange,
    #[serde(default)]
    balance: Option<(Flavor, Flavor)>,
}

#[cfg(feature = "serde")]
impl From<ConstraintDoc> for ConstraintSet {
    fn from(doc: ConstraintDoc) -> Self {
        let mut set = ConstraintSet {
            stars: StarRange::new(doc.stars.min, doc.stars.max),
            balance: doc.balance,
            ..ConstraintSet::default()
        };
        for (flavor, range) in doc.ranges {
            set.ranges[flavor.index()] = Some(range);
        }
        set
    }
}

#[cfg(feature = "serde")]
impl From<ConstraintSet> for ConstraintDoc {
    fn from(set: ConstraintSet) -> Self {
        ConstraintDoc {
            ranges: Flavor::ALL
                .iter()
                .filter_map(|&flavor| set.range(flavor).map(|range| (flavor, range)))
                .collect(),
            stars: set.stars,
            balance: set.balance,
        }
    }
}

impl ConstraintSet {
    /// Unconstrained set: no ranges, stars 0–5, no balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds one flavor to `min..=max`.
    pub fn with_range(mut self, flavor: Flavor, min: u32, max: u32) -> Self {
        self.ranges[flavor.index()] = Some(FlavorRange::new(min, max));
        self
    }

    /// Sets the star tier range (clamped to 0–5).
    pub fn with_star_range(mut self, min: u8, max: u8) -> Self {
        self.stars = StarRange::new(min, max);
        self
    }

    /// Requires `a` and `b` to end up equal and no other flavor above them.
    pub fn with_balance(mut self, a: Flavor, b: Flavor) -> Self {
        self.balance = Some((a, b));
        self
    }

    pub fn range(&self, flavor: Flavor) -> Option<FlavorRange> {
        self.ranges[flavor.index()]
    }

    pub fn star_range(&self) -> StarRange {
        self.stars
    }

    pub fn balance(&self) -> Option<(Flavor, Flavor)> {
        self.balance
    }

    /// Minimum for a flavor, 0 when unranged.
    pub fn lower_bound(&self, flavor: Flavor) -> u32 {
        self.range(flavor).map_or(0, |range| range.min)
    }

    /// Whether `flavor` in `vector` is still below its minimum.
    pub fn needs(&self, vector: &FlavorVector, flavor: Flavor) -> bool {
        vector.flavor(flavor) < self.lower_bound(flavor)
    }

    /// True iff every ranged flavor is in range, the balance pair (if any)
    /// is equal and maximal, and the star tier is within range.
    pub fn is_satisfied(&self, vector: &FlavorVector) -> bool {
        let in_ranges = Flavor::ALL.iter().all(|&flavor| {
            self.range(flavor)
                .map_or(true, |range| range.contains(vector.flavor(flavor)))
        });
        if !in_ranges {
            return false;
        }

        if let Some((a, b)) = self.balance {
            let (va, vb) = (vector.flavor(a), vector.flavor(b));
            if va != vb {
                return false;
            }
            let cap = va.min(vb);
            let others_capped = Flavor::ALL
                .iter()
                .filter(|&&flavor| flavor != a && flavor != b)
                .all(|&flavor| vector.flavor(flavor) <= cap);
            if !others_capped {
                return false;
            }
        }

        self.stars.contains(star_tier(vector))
    }

    /// True if no extension by at most `remaining_units` units can satisfy
    /// the ranges or the star ceiling.
    ///
    /// Each future unit is assumed to add at most `max_unit_contribution`
    /// to any one flavor. Upper-bound and star-ceiling violations are final
    /// because contributions are non-negative.
    pub fn is_hopeless(
        &self,
        vector: &FlavorVector,
        remaining_units: u32,
        max_unit_contribution: u32,
    ) -> bool {
        let headroom = max_unit_contribution.saturating_mul(remaining_units);
        let range_dead = Flavor::ALL.iter().any(|&flavor| match self.range(flavor) {
            Some(range) => {
                let value = vector.flavor(flavor);
                value > range.max || value.saturating_add(headroom) < range.min
            }
            None => false,
        });

        range_dead || star_tier(vector) > self.stars.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(flavors: [u32; 5]) -> FlavorVector {
        FlavorVector::new(flavors, 0)
    }

    #[test]
    fn test_unconstrained_accepts_anything_in_star_range() {
        let c = ConstraintSet::new();
        assert!(c.is_satisfied(&v([0, 0, 0, 0, 0])));
        assert!(c.is_satisfied(&v([900, 900, 0, 0, 0])));
    }

    #[test]
    fn test_range_inclusive() {
        let c = ConstraintSet::new().with_range(Flavor::Sour, 10, 20);
        assert!(!c.is_satisfied(&v([0, 0, 9, 0, 0])));
        assert!(c.is_satisfied(&v([0, 0, 10, 0, 0])));
        assert!(c.is_satisfied(&v([0, 0, 20, 0, 0])));
        assert!(!c.is_satisfied(&v([0, 0, 21, 0, 0])));
    }

    #[test]
    fn test_inverted_range_never_satisfied() {
        let c = ConstraintSet::new().with_range(Flavor::Sweet, 50, 10);
        for value in [0, 10, 30, 50, 100] {
            assert!(!c.is_satisfied(&v([value, 0, 0, 0, 0])));
        }
    }

    #[test]
    fn test_star_range() {
        let c = ConstraintSet::new().with_star_range(2, 3);
        assert!(!c.is_satisfied(&v([239, 0, 0, 0, 0])));
        assert!(c.is_satisfied(&v([240, 0, 0, 0, 0])));
        assert!(c.is_satisfied(&v([699, 0, 0, 0, 0])));
        assert!(!c.is_satisfied(&v([700, 0, 0, 0, 0])));
    }

    #[test]
    fn test_star_range_clamped() {
        let c = ConstraintSet::new().with_star_range(4, 9);
        assert_eq!(c.star_range(), StarRange { min: 4, max: 5 });
    }

    #[test]
    fn test_balance_requires_equality() {
        let c = ConstraintSet::new().with_balance(Flavor::Sweet, Flavor::Sour);
        assert!(c.is_satisfied(&v([40, 0, 40, 0, 0])));
        assert!(!c.is_satisfied(&v([40, 0, 39, 0, 0])));
    }

    #[test]
    fn test_balance_caps_other_flavors() {
        let c = ConstraintSet::new().with_balance(Flavor::Sweet, Flavor::Sour);
        assert!(c.is_satisfied(&v([40, 40, 40, 40, 40])));
        assert!(!c.is_satisfied(&v([40, 41, 40, 0, 0])));
    }

    #[test]
    fn test_balance_same_flavor_twice() {
        let c = ConstraintSet::new().with_balance(Flavor::Fresh, Flavor::Fresh);
        assert!(c.is_satisfied(&v([10, 0, 0, 0, 30])));
        assert!(!c.is_satisfied(&v([31, 0, 0, 0, 30])));
    }

    #[test]
    fn test_hopeless_upper_bound_exceeded() {
        let c = ConstraintSet::new().with_range(Flavor::Spicy, 0, 50);
        assert!(c.is_hopeless(&v([0, 51, 0, 0, 0]), 5, 95));
        assert!(!c.is_hopeless(&v([0, 50, 0, 0, 0]), 5, 95));
    }

    #[test]
    fn test_hopeless_lower_bound_unreachable() {
        let c = ConstraintSet::new().with_range(Flavor::Bitter, 200, 760);
        // 10 + 2 * 95 = 200: still reachable
        assert!(!c.is_hopeless(&v([0, 0, 0, 10, 0]), 2, 95));
        // 9 + 2 * 95 = 199: not reachable
        assert!(c.is_hopeless(&v([0, 0, 0, 9, 0]), 2, 95));
        assert!(c.is_hopeless(&v([0, 0, 0, 199, 0]), 0, 95));
    }

    #[test]
    fn test_hopeless_star_ceiling() {
        let c = ConstraintSet::new().with_star_range(0, 1);
        assert!(!c.is_hopeless(&v([239, 0, 0, 0, 0]), 3, 95));
        assert!(c.is_hopeless(&v([240, 0, 0, 0, 0]), 3, 95));
    }

    #[test]
    fn test_hopeless_ignores_star_floor() {
        let c = ConstraintSet::new().with_star_range(5, 5);
        assert!(!c.is_hopeless(&v([0, 0, 0, 0, 0]), 0, 95));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let json = r#"{"ranges": {"sweet": {"min": 10, "max": 20}}, "stars": {"min": 1, "max": 9}}"#;
        let c: ConstraintSet = serde_json::from_str(json).unwrap();
        assert_eq!(c.range(Flavor::Sweet), Some(FlavorRange::new(10, 20)));
        assert_eq!(c.range(Flavor::Sour), None);
        assert_eq!(c.star_range(), StarRange { min: 1, max: 5 });
        assert_eq!(c.balance(), None);

        let back: ConstraintSet =
            serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_needs() {
        let c = ConstraintSet::new().with_range(Flavor::Fresh, 30, 100);
        assert!(c.needs(&v([0, 0, 0, 0, 29]), Flavor::Fresh));
        assert!(!c.needs(&v([0, 0, 0, 0, 30]), Flavor::Fresh));
        assert!(!c.needs(&v([0, 0, 0, 0, 0]), Flavor::Sweet));
    }
}
