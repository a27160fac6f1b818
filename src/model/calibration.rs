//! Instance-aware penalty calibration.

use super::config::ModelConfig;
use crate::error::{QuboError, Result};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Derives penalty weights that dominate the objective.
///
/// With `r = objective_weight * max_value`, `W` the capacity and
/// `w_min = max(min_weight, 1)`:
///
/// - `mass_penalty = margin * r / w_min^2`. Adding any item to a full
///   selection raises the mass term by at least `mass_penalty * w^2`,
///   which then exceeds the item's reward.
/// - `pull = mass_penalty * max_i max(0, 2 * w_i * W - w_i^2)` bounds the
///   energy the mass term can pay for adding one item to an unfilled
///   selection.
/// - `category_penalty = taboo_penalty = margin * (2r + pull)`.
///
/// For `margin > 1`, removing one member of a conflicting pair always
/// lowers the energy, so the exact minimizer of the model never violates
/// the category or taboo rule. The mass ceiling stays a soft constraint.
///
/// # Examples
///
/// ```
/// use u_qubo::instance::{Instance, Item};
/// use u_qubo::model::{Calibration, ModelConfig};
///
/// let instance = Instance::new(vec![Item::new(900, 30, 0), Item::new(800, 30, 0)], []).unwrap();
/// let config = Calibration::default()
///     .calibrate(&instance, &ModelConfig::default().with_capacity(100))
///     .unwrap();
/// assert!(config.dominance(&instance).all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Safety factor above the bare domination bound. Must exceed 1.
    pub margin: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self { margin: 1.5 }
    }
}

impl Calibration {
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() {
            return Err(QuboError::NonFinite {
                what: "calibration margin",
                value: self.margin,
            });
        }
        if self.margin <= 1.0 {
            return Err(QuboError::invalid(format!(
                "calibration margin must exceed 1, got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Returns `base` with its three penalties replaced.
    ///
    /// `objective_weight` and `capacity` are taken from `base` unchanged.
    pub fn calibrate(&self, instance: &Instance, base: &ModelConfig) -> Result<ModelConfig> {
        self.validate()?;
        base.validate()?;
        if instance.is_empty() {
            return Err(QuboError::EmptyInstance);
        }

        let reward = base.objective_weight * instance.max_value().max(0) as f64;
        let min_weight = instance.min_weight().max(1) as f64;
        let mass_penalty = self.margin * reward / (min_weight * min_weight);

        let capacity = base.capacity as f64;
        let pull = instance
            .items()
            .iter()
            .map(|it| {
                let w = it.weight as f64;
                (2.0 * w * capacity - w * w).max(0.0)
            })
            .fold(0.0, f64::max)
            * mass_penalty;

        let pair_penalty = self.margin * (2.0 * reward + pull);

        Ok(base
            .clone()
            .with_mass_penalty(mass_penalty)
            .with_category_penalty(pair_penalty)
            .with_taboo_penalty(pair_penalty))
    }
}
