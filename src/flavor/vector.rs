//! Fixed-size attribute vector.

use super::{Axis, Flavor};

/// Per-axis totals: five flavor values plus calories.
///
/// The zero vector is the identity for [`add`](Self::add). All values are
/// non-negative integers, so equality between two axes is exact.
///
/// # Examples
///
/// ```
/// use berry_blend::flavor::{Flavor, FlavorVector};
///
/// let berry = FlavorVector::zero()
///     .with_flavor(Flavor::Sweet, 30)
///     .with_calories(20);
/// let total = FlavorVector::zero().add_scaled(&berry, 3);
/// assert_eq!(total.flavor(Flavor::Sweet), 90);
/// assert_eq!(total.calories(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlavorVector {
    flavors: [u32; 5],
    calories: u32,
}

impl FlavorVector {
    /// Vector with every axis at 0.
    pub const fn zero() -> Self {
        Self {
            flavors: [0; 5],
            calories: 0,
        }
    }

    /// Builds a vector from flavor values in [`Flavor::ALL`] order.
    pub const fn new(flavors: [u32; 5], calories: u32) -> Self {
        Self { flavors, calories }
    }

    /// Sets one flavor value.
    pub fn with_flavor(mut self, flavor: Flavor, value: u32) -> Self {
        self.flavors[flavor.index()] = value;
        self
    }

    /// Sets the calorie value.
    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Sets any axis.
    pub fn with_axis(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Flavor(flavor) => self.with_flavor(flavor, value),
            Axis::Calories => self.with_calories(value),
        }
    }

    pub fn flavor(&self, flavor: Flavor) -> u32 {
        self.flavors[flavor.index()]
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Flavor(flavor) => self.flavor(flavor),
            Axis::Calories => self.calories,
        }
    }

    /// Flavor values in [`Flavor::ALL`] order.
    pub fn flavors(&self) -> &[u32; 5] {
        &self.flavors
    }

    /// Sum of the flavor axes (calories excluded). Drives the star tier.
    pub fn flavor_sum(&self) -> u32 {
        self.flavors.iter().fold(0u32, |acc, &v| acc.saturating_add(v))
    }

    /// Axis-wise sum.
    pub fn add(&self, delta: &FlavorVector) -> FlavorVector {
        self.add_scaled(delta, 1)
    }

    /// Adds `times` copies of `delta`.
    pub fn add_scaled(&self, delta: &FlavorVector, times: u32) -> FlavorVector {
        let mut out = *self;
        for (acc, &d) in out.flavors.iter_mut().zip(delta.flavors.iter()) {
            *acc = acc.saturating_add(d.saturating_mul(times));
        }
        out.calories = out
            .calories
            .saturating_add(delta.calories.saturating_mul(times));
        out
    }

    /// In-place variant of [`add`](Self::add), used on the search hot path.
    pub(crate) fn add_assign(&mut self, delta: &FlavorVector) {
        *self = self.add(delta);
    }
}
