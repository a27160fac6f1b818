//! Generate → build → sample → evaluate.

use crate::config::RunConfig;
use crate::error::Result;
use crate::evaluate::{Evaluator, Report};
use crate::instance::{Instance, InstanceGenerator};
use crate::model::{CostModel, ModelBuilder, ModelConfig};
use crate::sa::SaSampler;
use crate::solver::{SampleSet, Sampler};
use tracing::info;

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub instance: Instance,
    /// Penalties actually used (after calibration, if enabled).
    pub model_config: ModelConfig,
    pub model: CostModel,
    pub samples: SampleSet,
    pub report: Report,
}

/// A configured run with an injected sampler.
///
/// # Examples
///
/// ```
/// use u_qubo::config::RunConfig;
/// use u_qubo::pipeline::Pipeline;
/// use u_qubo::solver::ExhaustiveSampler;
///
/// let mut config = RunConfig::default();
/// config.instance.num_items = 10;
/// config.model.capacity = 200;
///
/// let outcome = Pipeline::new(config, ExhaustiveSampler::new()).run().unwrap();
/// assert!(outcome.report.category_ok);
/// assert!(outcome.report.taboo_ok);
/// ```
pub struct Pipeline<S: Sampler> {
    config: RunConfig,
    sampler: S,
}

impl Pipeline<SaSampler> {
    /// Uses the annealer configured in `config.sampler`.
    pub fn annealing(config: RunConfig) -> Self {
        let sampler = SaSampler::new(config.sampler.clone());
        Self::new(config, sampler)
    }
}

impl<S: Sampler> Pipeline<S> {
    pub fn new(config: RunConfig, sampler: S) -> Self {
        Self { config, sampler }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Generates the configured instance and solves it.
    pub fn run(&self) -> Result<RunOutcome> {
        self.config.validate()?;
        let instance = InstanceGenerator::generate(&self.config.instance)?;
        self.run_on(instance)
    }

    /// Solves a given instance with this pipeline's model and sampler
    /// settings.
    pub fn run_on(&self, instance: Instance) -> Result<RunOutcome> {
        let model_config = self.resolve_model_config(&instance)?;
        info!(
            items = instance.len(),
            forbidden_pairs = instance.forbidden_pairs().len(),
            capacity = model_config.capacity,
            category_penalty = model_config.category_penalty,
            taboo_penalty = model_config.taboo_penalty,
            mass_penalty = model_config.mass_penalty,
            "run started"
        );

        let model = ModelBuilder::new(&instance, &model_config).build()?;
        let samples = self.sampler.sample(&model)?;
        let report = Evaluator::new(&instance, model_config.capacity).evaluate_best(&samples)?;

        info!(
            energy = report.energy,
            selected = report.selected.len(),
            total_value = report.total_value,
            total_weight = report.total_weight,
            feasible = report.is_feasible(),
            "run finished"
        );

        Ok(RunOutcome {
            instance,
            model_config,
            model,
            samples,
            report,
        })
    }

    fn resolve_model_config(&self, instance: &Instance) -> Result<ModelConfig> {
        if self.config.calibrate {
            self.config.calibration.calibrate(instance, &self.config.model)
        } else {
            self.config.model.validate()?;
            Ok(self.config.model.clone())
        }
    }
}
