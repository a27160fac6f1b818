//! Encodes an instance and its rules into a [`CostModel`].

use super::config::ModelConfig;
use super::types::CostModel;
use crate::error::{QuboError, Result};
use crate::instance::Instance;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Builds the QUBO for an instance.
///
/// Terms, with `P` the mass penalty and `W` the capacity:
///
/// - objective: `L[i] -= objective_weight * value[i]`
/// - mass ceiling, `P * (sum_i w_i x_i - W)^2` expanded with `x_i^2 = x_i`:
///   `L[i] += P * (w_i^2 - 2 W w_i)`, `C[i][j] += 2 P w_i w_j`,
///   constant `P W^2` kept as the model offset
/// - category exclusivity: `C[i][j] += category_penalty` for every pair in
///   the same category
/// - taboo pairs: `C[i][j] += taboo_penalty` for every forbidden pair
///
/// The build is pure: identical inputs give identical models.
///
/// # Examples
///
/// ```
/// use u_qubo::instance::{Instance, Item};
/// use u_qubo::model::{ModelBuilder, ModelConfig};
///
/// let instance = Instance::new(vec![Item::new(500, 50, 0)], []).unwrap();
/// let config = ModelConfig::default().with_capacity(100).with_mass_penalty(1.0);
/// let model = ModelBuilder::new(&instance, &config).build().unwrap();
/// // -500 + (50^2 - 2 * 100 * 50)
/// assert_eq!(model.linear(0), -8000.0);
/// ```
pub struct ModelBuilder<'a> {
    instance: &'a Instance,
    config: &'a ModelConfig,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(instance: &'a Instance, config: &'a ModelConfig) -> Self {
        Self { instance, config }
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// - [`QuboError::EmptyInstance`] if the instance has no items
    /// - [`QuboError::InvalidConfig`] / [`QuboError::NonFinite`] if the
    ///   configuration is invalid or produces a non-finite coefficient
    pub fn build(&self) -> Result<CostModel> {
        self.config.validate()?;
        if self.instance.is_empty() {
            return Err(QuboError::EmptyInstance);
        }

        let dominance = self.config.dominance(self.instance);
        if !dominance.all() {
            warn!(
                category = dominance.category,
                taboo = dominance.taboo,
                mass = dominance.mass,
                max_value = self.instance.max_value(),
                "penalties do not dominate the largest item value"
            );
        }

        let mut model = CostModel::zeros(self.instance.len());
        self.add_objective(&mut model);
        self.add_mass_ceiling(&mut model);
        let category_pairs = self.add_category_exclusivity(&mut model);
        self.add_taboo_pairs(&mut model);

        if let Some(value) = model.first_non_finite() {
            return Err(QuboError::NonFinite {
                what: "cost model coefficient",
                value,
            });
        }

        debug!(
            variables = model.len(),
            category_pairs,
            taboo_pairs = self.instance.forbidden_pairs().len(),
            offset = model.offset(),
            "built cost model"
        );
        Ok(model)
    }

    fn add_objective(&self, model: &mut CostModel) {
        for (i, item) in self.instance.items().iter().enumerate() {
            model.add_linear(i, -self.config.objective_weight * item.value as f64);
        }
    }

    fn add_mass_ceiling(&self, model: &mut CostModel) {
        let p = self.config.mass_penalty;
        let capacity = self.config.capacity as f64;
        let items = self.instance.items();
        for (i, a) in items.iter().enumerate() {
            let wi = a.weight as f64;
            model.add_linear(i, p * (wi * wi - 2.0 * capacity * wi));
            for (j, b) in items.iter().enumerate().skip(i + 1) {
                model.add_coupling(i, j, 2.0 * p * wi * b.weight as f64);
            }
        }
        model.add_offset(p * capacity * capacity);
    }

    /// Returns the number of penalized pairs.
    fn add_category_exclusivity(&self, model: &mut CostModel) -> usize {
        let mut by_category: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (i, item) in self.instance.items().iter().enumerate() {
            by_category.entry(item.category).or_default().push(i);
        }

        let mut pairs = 0;
        for members in by_category.values() {
            for (k, &i) in members.iter().enumerate() {
                for &j in &members[k + 1..] {
                    model.add_coupling(i, j, self.config.category_penalty);
                    pairs += 1;
                }
            }
        }
        pairs
    }

    fn add_taboo_pairs(&self, model: &mut CostModel) {
        for pair in self.instance.forbidden_pairs() {
            model.add_coupling(pair.low(), pair.high(), self.config.taboo_penalty);
        }
    }
}
