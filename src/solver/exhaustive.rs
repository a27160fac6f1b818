//! Exact minimizer by full enumeration.

use super::types::{Sample, SampleSet, Sampler};
use crate::error::{QuboError, Result};
use crate::model::CostModel;
use tracing::debug;

/// Hard ceiling on enumerable variables.
pub const MAX_EXHAUSTIVE_VARIABLES: usize = 30;

/// Enumerates all `2^n` assignments in Gray-code order.
///
/// Each step flips a single bit, so the energy is updated from local fields
/// in `O(n)`. The walk starts at the all-zero assignment; among equal
/// minimal energies the first one visited is returned. Intended for small
/// models and as a deterministic stand-in for the annealer in tests.
#[derive(Debug, Clone)]
pub struct ExhaustiveSampler {
    max_variables: usize,
}

impl Default for ExhaustiveSampler {
    fn default() -> Self {
        Self { max_variables: 20 }
    }
}

impl ExhaustiveSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises or lowers the size limit, capped at
    /// [`MAX_EXHAUSTIVE_VARIABLES`].
    pub fn with_max_variables(mut self, n: usize) -> Self {
        self.max_variables = n.min(MAX_EXHAUSTIVE_VARIABLES);
        self
    }

    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}

impl Sampler for ExhaustiveSampler {
    fn sample(&self, model: &CostModel) -> Result<SampleSet> {
        let n = model.len();
        if n > self.max_variables {
            return Err(QuboError::Solver(format!(
                "exhaustive search limited to {} variables, model has {n}",
                self.max_variables
            )));
        }

        let mut bits = vec![false; n];
        let mut fields: Vec<f64> = (0..n).map(|i| model.linear(i)).collect();
        let mut energy = 0.0;
        let mut best_bits = bits.clone();
        let mut best_energy = energy;

        for step in 1u64..(1u64 << n) {
            let i = step.trailing_zeros() as usize;
            let sign = if bits[i] { -1.0 } else { 1.0 };
            energy += sign * fields[i];
            bits[i] = !bits[i];
            for (field, c) in fields.iter_mut().zip(model.coupling_row(i)) {
                *field += sign * c;
            }

            if energy < best_energy {
                best_energy = energy;
                best_bits.clone_from(&bits);
            }
        }

        let best_energy = model.energy(&best_bits)?;
        debug!(
            variables = n,
            assignments = 1u64 << n,
            best_energy,
            "exhaustive search finished"
        );
        Ok(SampleSet::new(vec![Sample::new(best_bits, best_energy)]))
    }
}
