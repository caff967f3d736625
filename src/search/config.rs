//! Search configuration.

use crate::error::BlendError;

/// Configuration parameters for the blend search.
///
/// # Examples
///
/// ```
/// use berry_blend::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_units(6)
///     .with_max_results(10);
/// assert_eq!(config.max_units, 6);
/// assert_eq!(config.min_units, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum total units in one combination.
    pub max_units: u32,

    /// Maximum number of combinations returned.
    pub max_results: usize,

    /// Fewest units a combination needs before it can be accepted.
    ///
    /// Keeps one- and two-berry blends out of the results even when they
    /// numerically satisfy every bound.
    pub min_units: u32,

    /// Upper bound on what one unit adds to a single flavor.
    ///
    /// Used by the hopeless test. Must be at least the largest flavor value
    /// in the catalog for that test to stay sound.
    pub max_unit_contribution: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_units: 8,
            max_results: 25,
            min_units: 3,
            max_unit_contribution: 95,
        }
    }
}

impl SearchConfig {
    /// Sets the unit cap.
    pub fn with_max_units(mut self, n: u32) -> Self {
        self.max_units = n;
        self
    }

    /// Sets the result capacity.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Sets the acceptance floor.
    pub fn with_min_units(mut self, n: u32) -> Self {
        self.min_units = n;
        self
    }

    /// Sets the per-unit contribution ceiling.
    pub fn with_max_unit_contribution(mut self, n: u32) -> Self {
        self.max_unit_contribution = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BlendError> {
        if self.max_units == 0 {
            return Err(BlendError::InvalidConfig(
                "max_units must be at least 1".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(BlendError::InvalidConfig(
                "max_results must be at least 1".into(),
            ));
        }
        if self.min_units == 0 {
            return Err(BlendError::InvalidConfig(
                "min_units must be at least 1".into(),
            ));
        }
        if self.min_units > self.max_units {
            return Err(BlendError::InvalidConfig(format!(
                "min_units ({}) exceeds max_units ({})",
                self.min_units, self.max_units
            )));
        }
        Ok(())
    }
}
