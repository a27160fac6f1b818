//! Sampler contract and its results.

use crate::error::Result;
use crate::model::CostModel;
use serde::{Deserialize, Serialize};

/// One assignment returned by a sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// One bit per model variable; `true` = selected.
    pub bits: Vec<bool>,
    /// Model energy of `bits` (offset excluded).
    pub energy: f64,
}

impl Sample {
    pub fn new(bits: Vec<bool>, energy: f64) -> Self {
        Self { bits, energy }
    }

    /// Indices of the set bits, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }
}

/// All samples returned by one sampler call, in the sampler's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// The lowest-energy sample. Among equal energies the first one wins.
    pub fn lowest(&self) -> Option<&Sample> {
        let mut best: Option<&Sample> = None;
        for sample in &self.samples {
            if best.is_none_or(|b| sample.energy < b.energy) {
                best = Some(sample);
            }
        }
        best
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A minimizer of `E(x)` over binary `x`.
///
/// Implementations may be heuristic and non-deterministic. Callers pick
/// the best sample with [`SampleSet::lowest`] and must check feasibility
/// themselves.
pub trait Sampler {
    /// Samples low-energy assignments of `model`.
    fn sample(&self, model: &CostModel) -> Result<SampleSet>;
}
