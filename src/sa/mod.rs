//! Simulated Annealing (SA) over binary quadratic models.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima. Here a move is a single-bit flip and the cost is the
//! [`CostModel`](crate::model::CostModel) energy.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod sampler;

pub use config::{CoolingSchedule, SaConfig, TemperatureRange};
pub use runner::{SaRead, SaRunner};
pub use sampler::SaSampler;
