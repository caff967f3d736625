//! Attribute model: flavor axes, the calorie axis, and per-unit vectors.
//!
//! Every berry contributes a fixed [`FlavorVector`] per unit. The axis set
//! is closed ([`Flavor::ALL`] plus [`Axis::Calories`]), so every vector
//! carries every axis and no lookup can miss.

mod vector;

pub use vector::FlavorVector;

use std::fmt;
use std::str::FromStr;

/// One of the five flavor axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Flavor {
    Sweet,
    Spicy,
    Sour,
    Bitter,
    Fresh,
}

impl Flavor {
    /// All flavors in storage order.
    pub const ALL: [Flavor; 5] = [
        Flavor::Sweet,
        Flavor::Spicy,
        Flavor::Sour,
        Flavor::Bitter,
        Flavor::Fresh,
    ];

    /// Position of this flavor inside a [`FlavorVector`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in catalog headers.
    pub const fn name(self) -> &'static str {
        match self {
            Flavor::Sweet => "sweet",
            Flavor::Spicy => "spicy",
            Flavor::Sour => "sour",
            Flavor::Bitter => "bitter",
            Flavor::Fresh => "fresh",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.name() == lowered)
            .ok_or_else(|| format!("unknown flavor: {s}"))
    }
}

/// A tracked attribute: one flavor, or the derived calorie value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Flavor(Flavor),
    Calories,
}

impl Axis {
    /// Every axis: the five flavors followed by calories.
    pub const ALL: [Axis; 6] = [
        Axis::Flavor(Flavor::Sweet),
        Axis::Flavor(Flavor::Spicy),
        Axis::Flavor(Flavor::Sour),
        Axis::Flavor(Flavor::Bitter),
        Axis::Flavor(Flavor::Fresh),
        Axis::Calories,
    ];
}

impl From<Flavor> for Axis {
    fn from(flavor: Flavor) -> Self {
        Axis::Flavor(flavor)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Flavor(flavor) => flavor.fmt(f),
            Axis::Calories => f.write_str("calories"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("calories") {
            return Ok(Axis::Calories);
        }
        s.parse::<Flavor>()
            .map(Axis::Flavor)
            .map_err(|_| format!("unknown axis: {s}"))
    }
}
