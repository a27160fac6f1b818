//! SA configuration, temperature range, and cooling schedules.

use crate::error::{QuboError, Result};
use crate::model::CostModel;
use serde::{Deserialize, Serialize};

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 - k * (T_0 - T_min) / steps`.
    ///
    /// `steps` is `max_sweeps / sweeps_per_temperature` when a sweep budget
    /// is set, otherwise 1000.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// One sweep per temperature step.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_sweeps * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Start and stop temperatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TemperatureRange {
    /// Derived from the model's coefficient magnitudes:
    /// the largest possible uphill flip is accepted with probability 1/2 at
    /// the start, the smallest non-zero one with probability 1/100 at the
    /// end.
    #[default]
    Auto,

    /// Explicit temperatures.
    Fixed { initial: f64, min: f64 },
}

impl TemperatureRange {
    /// Returns `(initial, min)` for `model`.
    pub fn resolve(&self, model: &CostModel) -> (f64, f64) {
        match *self {
            TemperatureRange::Fixed { initial, min } => (initial, min),
            TemperatureRange::Auto => {
                let max_delta = model.max_abs_field();
                match model.min_abs_coefficient() {
                    Some(min_delta) if max_delta > 0.0 => (
                        max_delta / std::f64::consts::LN_2,
                        min_delta / 100f64.ln(),
                    ),
                    _ => (1.0, 1e-3),
                }
            }
        }
    }
}

/// Configuration for the annealing sampler.
///
/// A *sweep* is `n` single-bit flip proposals for a model with `n`
/// variables.
///
/// # Examples
///
/// ```
/// use u_qubo::sa::{CoolingSchedule, SaConfig, TemperatureRange};
///
/// let config = SaConfig::default()
///     .with_temperature(TemperatureRange::Fixed { initial: 100.0, min: 0.01 })
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_sweeps_per_temperature(4)
///     .with_num_reads(20)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Start and stop temperatures.
    pub temperature: TemperatureRange,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Sweeps at each temperature level. Ignored by `LundyMees`.
    pub sweeps_per_temperature: usize,

    /// Maximum sweeps per read (hard budget). 0 = no limit.
    pub max_sweeps: usize,

    /// Number of independent reads, each from a random start.
    pub num_reads: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureRange::default(),
            cooling: CoolingSchedule::default(),
            sweeps_per_temperature: 2,
            max_sweeps: 0,
            num_reads: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_temperature(mut self, range: TemperatureRange) -> Self {
        self.temperature = range;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_sweeps_per_temperature(mut self, n: usize) -> Self {
        self.sweeps_per_temperature = n;
        self
    }

    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    pub fn with_num_reads(mut self, n: usize) -> Self {
        self.num_reads = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let TemperatureRange::Fixed { initial, min } = self.temperature {
            if !(initial > 0.0 && initial.is_finite()) {
                return Err(QuboError::invalid("initial temperature must be positive"));
            }
            if !(min > 0.0 && min.is_finite()) {
                return Err(QuboError::invalid("min temperature must be positive"));
            }
            if min >= initial {
                return Err(QuboError::invalid(
                    "min temperature must be less than initial temperature",
                ));
            }
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(QuboError::invalid(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(QuboError::invalid(format!(
                        "lundy-mees beta must be positive and finite, got {beta}"
                    )));
                }
            }
            CoolingSchedule::Linear => {}
        }
        if self.sweeps_per_temperature == 0 {
            return Err(QuboError::invalid("sweeps_per_temperature must be positive"));
        }
        if self.num_reads == 0 {
            return Err(QuboError::invalid("num_reads must be positive"));
        }
        Ok(())
    }
}
