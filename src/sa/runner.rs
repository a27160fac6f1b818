//! SA execution loop for a single read.

use super::config::{CoolingSchedule, SaConfig};
use crate::error::Result;
use crate::model::CostModel;
use rand::Rng;

/// Result of one annealing read.
#[derive(Debug, Clone)]
pub struct SaRead {
    /// Best assignment visited.
    pub bits: Vec<bool>,

    /// Energy of `bits`, recomputed exactly from the model.
    pub energy: f64,

    /// Total sweeps performed.
    pub sweeps: usize,

    /// Final temperature when the read stopped.
    pub final_temperature: f64,

    /// Number of accepted flips (including improvements).
    pub accepted_moves: usize,

    /// Number of improving flips.
    pub improving_moves: usize,

    /// Best energy after each temperature level.
    pub energy_history: Vec<f64>,
}

/// Executes one annealing read over a [`CostModel`].
pub struct SaRunner;

impl SaRunner {
    /// Anneals from a uniform random assignment between `initial` and
    /// `min` temperature.
    ///
    /// Moves are single-bit flips evaluated through incrementally
    /// maintained local fields, accepted by the Metropolis criterion.
    pub fn run<R: Rng>(
        model: &CostModel,
        config: &SaConfig,
        (initial, min): (f64, f64),
        rng: &mut R,
    ) -> Result<SaRead> {
        let n = model.len();

        let mut bits: Vec<bool> = (0..n).map(|_| rng.random_bool(0.5)).collect();
        let mut fields: Vec<f64> = (0..n).map(|i| model.local_field(&bits, i)).collect();
        let mut energy = model.energy(&bits)?;
        let mut best = bits.clone();
        let mut best_energy = energy;

        let mut temperature = initial;
        let mut sweeps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut energy_history = vec![best_energy];

        let linear_max_steps = compute_linear_steps(config);
        let mut step = 0usize;
        let budget_spent = |sweeps: usize| config.max_sweeps > 0 && sweeps >= config.max_sweeps;

        while n > 0 && temperature > min {
            let inner_sweeps = match config.cooling {
                CoolingSchedule::LundyMees { .. } => 1,
                _ => config.sweeps_per_temperature,
            };

            for _ in 0..inner_sweeps {
                if budget_spent(sweeps) {
                    break;
                }

                for _ in 0..n {
                    let i = rng.random_range(0..n);
                    let delta = if bits[i] { -fields[i] } else { fields[i] };

                    // Metropolis acceptance criterion
                    let accept = if delta < 0.0 {
                        improving_moves += 1;
                        true
                    } else {
                        let probability = (-delta / temperature).exp();
                        rng.random_range(0.0..1.0) < probability
                    };

                    if accept {
                        let sign = if bits[i] { -1.0 } else { 1.0 };
                        bits[i] = !bits[i];
                        for (field, c) in fields.iter_mut().zip(model.coupling_row(i)) {
                            *field += sign * c;
                        }
                        energy += delta;
                        accepted_moves += 1;

                        if energy < best_energy {
                            best.clone_from(&bits);
                            best_energy = energy;
                        }
                    }
                }
                sweeps += 1;
            }
            energy_history.push(best_energy);

            if budget_spent(sweeps) {
                break;
            }

            temperature = cool(temperature, config, initial, min, step, linear_max_steps);
            step += 1;
        }

        Ok(SaRead {
            energy: model.energy(&best)?,
            bits: best,
            sweeps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            energy_history,
        })
    }
}

/// Apply the cooling schedule to compute the next temperature.
fn cool(
    temperature: f64,
    config: &SaConfig,
    initial: f64,
    min: f64,
    step: usize,
    linear_max_steps: usize,
) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            let t = initial - (step + 1) as f64 * (initial - min) / linear_max_steps as f64;
            t.max(min)
        }

        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

/// Number of temperature steps for linear cooling.
fn compute_linear_steps(config: &SaConfig) -> usize {
    match config.cooling {
        CoolingSchedule::Linear => {
            if config.max_sweeps > 0 {
                (config.max_sweeps / config.sweeps_per_temperature).max(1)
            } else {
                1000
            }
        }
        _ => 0,
    }
}
