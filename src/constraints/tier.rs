//! Star tier scale.

use crate::flavor::FlavorVector;

/// Highest star tier.
pub const MAX_STARS: u8 = 5;

/// Inclusive lower bounds on the flavor sum for tiers 1 through 5.
pub const STAR_THRESHOLDS: [u32; 5] = [120, 240, 350, 700, 960];

/// Star tier (0–5) of an aggregate, from the sum of its flavor axes.
///
/// Non-decreasing as units are added, since every contribution is
/// non-negative.
///
/// ```
/// use berry_blend::constraints::star_tier;
/// use berry_blend::flavor::{Flavor, FlavorVector};
///
/// let v = FlavorVector::zero().with_flavor(Flavor::Sweet, 240);
/// assert_eq!(star_tier(&v), 2);
/// ```
pub fn star_tier(vector: &FlavorVector) -> u8 {
    let sum = vector.flavor_sum();
    STAR_THRESHOLDS
        .iter()
        .take_while(|&&threshold| sum >= threshold)
        .count() as u8
}
