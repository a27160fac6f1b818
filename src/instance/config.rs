//! Instance generation parameters.

use crate::error::{QuboError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`InstanceGenerator`](super::InstanceGenerator).
///
/// Value, weight, and category ranges are inclusive.
///
/// # Examples
///
/// ```
/// use u_qubo::instance::InstanceConfig;
///
/// let config = InstanceConfig::default()
///     .with_num_items(20)
///     .with_num_taboo_pairs(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Number of items to generate.
    pub num_items: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub min_weight: i64,
    pub max_weight: i64,
    /// Categories are drawn from `0..num_categories`.
    pub num_categories: u32,
    /// Number of forbidden-pair draws. Duplicates collapse, so the final
    /// set can be smaller.
    pub num_taboo_pairs: usize,
    /// Seed for all attribute streams.
    pub seed: u64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_items: 100,
            min_value: 100,
            max_value: 1000,
            min_weight: 10,
            max_weight: 100,
            num_categories: 10,
            num_taboo_pairs: 5,
            seed: 6,
        }
    }
}

impl InstanceConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_weight_range(mut self, min: i64, max: i64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_num_categories(mut self, n: u32) -> Self {
        self.num_categories = n;
        self
    }

    pub fn with_num_taboo_pairs(mut self, n: usize) -> Self {
        self.num_taboo_pairs = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(QuboError::EmptyInstance);
        }
        if self.min_value > self.max_value {
            return Err(QuboError::invalid(format!(
                "value range is empty: [{}, {}]",
                self.min_value, self.max_value
            )));
        }
        if self.min_weight < 0 {
            return Err(QuboError::invalid("min_weight must be non-negative"));
        }
        if self.min_weight > self.max_weight {
            return Err(QuboError::invalid(format!(
                "weight range is empty: [{}, {}]",
                self.min_weight, self.max_weight
            )));
        }
        if self.num_categories == 0 {
            return Err(QuboError::invalid("num_categories must be positive"));
        }
        if self.num_taboo_pairs > 0 && self.num_items < 2 {
            return Err(QuboError::invalid(
                "taboo pairs need at least two items",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstanceConfig::default();
        assert_eq!(config.num_items, 100);
        assert_eq!((config.min_value, config.max_value), (100, 1000));
        assert_eq!((config.min_weight, config.max_weight), (10, 100));
        assert_eq!(config.num_categories, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let config = InstanceConfig::default().with_num_items(0);
        assert!(matches!(config.validate(), Err(QuboError::EmptyInstance)));
    }

    #[test]
    fn test_validate_inverted_ranges() {
        assert!(InstanceConfig::default()
            .with_value_range(10, 5)
            .validate()
            .is_err());
        assert!(InstanceConfig::default()
            .with_weight_range(50, 10)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_negative_weight() {
        let config = InstanceConfig::default().with_weight_range(-1, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_taboo_needs_two_items() {
        let config = InstanceConfig::default()
            .with_num_items(1)
            .with_num_taboo_pairs(1);
        assert!(config.validate().is_err());
        assert!(config.with_num_taboo_pairs(0).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: InstanceConfig = toml::from_str("num_items = 12\nseed = 3").unwrap();
        assert_eq!(config.num_items, 12);
        assert_eq!(config.seed, 3);
        assert_eq!(config.num_categories, 10);
    }
}
