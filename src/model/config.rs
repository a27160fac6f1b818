//! Penalty weights and the mass ceiling.

use crate::error::{QuboError, Result};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Coefficients used by [`ModelBuilder`](super::ModelBuilder).
///
/// The defaults are fixed constants that do not adapt to the instance;
/// use [`Calibration`](super::Calibration) to derive penalties that
/// dominate the objective for a concrete instance.
///
/// # Examples
///
/// ```
/// use u_qubo::model::ModelConfig;
///
/// let config = ModelConfig::default()
///     .with_capacity(500)
///     .with_category_penalty(2500.0)
///     .with_taboo_penalty(2500.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Scales the value reward on the diagonal.
    pub objective_weight: f64,

    /// Added to the coupling of every same-category pair.
    pub category_penalty: f64,

    /// Added to the coupling of every forbidden pair.
    pub taboo_penalty: f64,

    /// Coefficient of `(total_weight - capacity)^2`.
    pub mass_penalty: f64,

    /// Mass ceiling. Zero is allowed and admits only weightless selections.
    pub capacity: i64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            objective_weight: 1.0,
            category_penalty: 50.0,
            taboo_penalty: 100.0,
            mass_penalty: 50.0,
            capacity: 1000,
        }
    }
}

/// Which penalties satisfy the domination invariant for an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dominance {
    /// `category_penalty > 2 * objective_weight * max_value`.
    pub category: bool,
    /// `taboo_penalty > 2 * objective_weight * max_value`.
    pub taboo: bool,
    /// `mass_penalty * min_weight^2 > objective_weight * max_value`.
    pub mass: bool,
}

impl Dominance {
    pub fn all(&self) -> bool {
        self.category && self.taboo && self.mass
    }
}

impl ModelConfig {
    pub fn with_objective_weight(mut self, w: f64) -> Self {
        self.objective_weight = w;
        self
    }

    pub fn with_category_penalty(mut self, p: f64) -> Self {
        self.category_penalty = p;
        self
    }

    pub fn with_taboo_penalty(mut self, p: f64) -> Self {
        self.taboo_penalty = p;
        self
    }

    pub fn with_mass_penalty(mut self, p: f64) -> Self {
        self.mass_penalty = p;
        self
    }

    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("objective_weight", self.objective_weight),
            ("category_penalty", self.category_penalty),
            ("taboo_penalty", self.taboo_penalty),
            ("mass_penalty", self.mass_penalty),
        ];
        for (what, value) in coefficients {
            if !value.is_finite() {
                return Err(QuboError::NonFinite { what, value });
            }
        }
        if self.objective_weight <= 0.0 {
            return Err(QuboError::invalid(format!(
                "objective_weight must be positive, got {}",
                self.objective_weight
            )));
        }
        for (name, value) in &coefficients[1..] {
            if *value < 0.0 {
                return Err(QuboError::invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.capacity < 0 {
            return Err(QuboError::invalid(format!(
                "capacity must be non-negative, got {}",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Checks the penalties against the largest reward in `instance`.
    pub fn dominance(&self, instance: &Instance) -> Dominance {
        let max_reward = self.objective_weight * instance.max_value() as f64;
        let min_weight = instance.min_weight() as f64;
        Dominance {
            category: self.category_penalty > 2.0 * max_reward,
            taboo: self.taboo_penalty > 2.0 * max_reward,
            mass: self.mass_penalty * min_weight * min_weight > max_reward,
        }
    }
}
