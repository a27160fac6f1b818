//! QUBO encoding of the item-selection rules.
//!
//! The solver minimizes, so item values enter with a negative sign and
//! every rule becomes a non-negative penalty:
//!
//! - **Mass ceiling**: soft quadratic penalty on `total_weight - capacity`.
//! - **Category exclusivity**: pair penalty for items sharing a category.
//! - **Taboo pairs**: pair penalty for each forbidden pair.
//!
//! Penalties only bias the search. Feasibility of a returned selection is
//! decided by [`Evaluator`](crate::evaluate::Evaluator), never by energy.

mod builder;
mod calibration;
mod config;
mod types;

pub use builder::ModelBuilder;
pub use calibration::Calibration;
pub use config::{Dominance, ModelConfig};
pub use types::CostModel;
