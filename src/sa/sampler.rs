//! Multi-read annealing sampler.

use super::config::SaConfig;
use super::runner::SaRunner;
use crate::error::Result;
use crate::model::CostModel;
use crate::solver::{Sample, SampleSet, Sampler};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Simulated-annealing [`Sampler`].
///
/// Runs `num_reads` independent reads one after another from a single
/// seeded generator and returns every read's best assignment in read order.
///
/// # Examples
///
/// ```
/// use u_qubo::model::CostModel;
/// use u_qubo::sa::{SaConfig, SaSampler};
/// use u_qubo::solver::Sampler;
///
/// let mut model = CostModel::zeros(2);
/// model.add_linear(0, -1.0);
/// model.add_linear(1, -1.0);
/// model.add_coupling(0, 1, 3.0);
///
/// let sampler = SaSampler::new(SaConfig::default().with_num_reads(5).with_seed(1));
/// let samples = sampler.sample(&model).unwrap();
/// assert_eq!(samples.len(), 5);
/// assert_eq!(samples.lowest().unwrap().energy, -1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SaSampler {
    config: SaConfig,
}

impl SaSampler {
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl Sampler for SaSampler {
    fn sample(&self, model: &CostModel) -> Result<SampleSet> {
        self.config.validate()?;
        let temperatures = self.config.temperature.resolve(model);

        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        info!(
            variables = model.len(),
            reads = self.config.num_reads,
            initial_temperature = temperatures.0,
            min_temperature = temperatures.1,
            "annealing started"
        );

        let mut samples = Vec::with_capacity(self.config.num_reads);
        for read_index in 0..self.config.num_reads {
            let read = SaRunner::run(model, &self.config, temperatures, &mut rng)?;
            debug!(
                read = read_index,
                energy = read.energy,
                sweeps = read.sweeps,
                accepted = read.accepted_moves,
                improving = read.improving_moves,
                final_temperature = read.final_temperature,
                "read finished"
            );
            samples.push(Sample::new(read.bits, read.energy));
        }

        let set = SampleSet::new(samples);
        if let Some(best) = set.lowest() {
            info!(best_energy = best.energy, "annealing finished");
        }
        Ok(set)
    }
}
