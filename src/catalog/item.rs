//! Catalog items and the ordered catalog container.

use std::collections::HashMap;

use crate::flavor::FlavorVector;

use super::overrides::AvailabilityOverrides;

/// A berry: unique name, per-unit contribution, usable quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    /// Unique berry name.
    pub name: String,
    /// Contribution of one unit.
    pub stats: FlavorVector,
    /// Maximum units usable in one combination.
    pub available: u32,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, stats: FlavorVector, available: u32) -> Self {
        Self {
            name: name.into(),
            stats,
            available,
        }
    }
}

/// Ordered berry catalog.
///
/// # Examples
///
/// ```
/// use berry_blend::catalog::{Catalog, CatalogItem};
/// use berry_blend::flavor::{Flavor, FlavorVector};
///
/// let mut catalog = Catalog::new();
/// catalog.add_item(CatalogItem::new(
///     "Oran",
///     FlavorVector::zero().with_flavor(Flavor::Sweet, 40),
///     4,
/// ));
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get("Oran").map(|item| item.available), Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. An item with an existing name is replaced in place,
    /// keeping its original position.
    pub fn add_item(&mut self, item: CatalogItem) {
        match self.index.get(&item.name) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(item.name.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Builder form of [`add_item`](Self::add_item).
    pub fn with_item(mut self, item: CatalogItem) -> Self {
        self.add_item(item);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CatalogItem> {
        self.index.get(name).map(|&pos| &self.items[pos])
    }

    /// Position of the named item in catalog order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the availability of every named item; unknown names are ignored.
    ///
    /// Returns how many overrides matched an item.
    pub fn apply_availability(&mut self, overrides: &AvailabilityOverrides) -> usize {
        let mut applied = 0;
        for (name, &quantity) in overrides.iter() {
            if let Some(&pos) = self.index.get(name) {
                self.items[pos].available = quantity;
                applied += 1;
            } else {
                tracing::debug!(berry = %name, "availability override for unknown berry ignored");
            }
        }
        applied
    }

    /// Current availability of every item, for persisting.
    pub fn availability(&self) -> AvailabilityOverrides {
        self.items
            .iter()
            .map(|item| (item.name.clone(), item.available))
            .collect()
    }

    /// Sets one item's availability. Returns `false` for an unknown name.
    pub fn set_available(&mut self, name: &str, available: u32) -> bool {
        match self.index.get(name) {
            Some(&pos) => {
                self.items[pos].available = available;
                true
            }
            None => false,
        }
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogItem>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for item in iter {
            catalog.add_item(item);
        }
        catalog
    }
}
