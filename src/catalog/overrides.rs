//! Persisted per-berry quantities.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Berry name → usable quantity, as remembered between sessions.
///
/// Applied to a [`Catalog`](super::Catalog) with
/// [`apply_availability`](super::Catalog::apply_availability). With the
/// `serde` feature this round-trips through a flat JSON object
/// (`{"Oran": 3, "Pecha": 0}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AvailabilityOverrides(BTreeMap<String, u32>);

impl AvailabilityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32) -> Option<u32> {
        self.0.insert(name.into(), quantity)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u32> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses overrides from a JSON object.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::BlendError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes overrides to a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, crate::BlendError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<(String, u32)> for AvailabilityOverrides {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AvailabilityOverrides {
    type Item = (&'a String, &'a u32);
    type IntoIter = btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
