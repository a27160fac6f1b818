//! QUBO encoding and annealing for constrained item selection.
//!
//! Selects items maximizing total value subject to three rules:
//!
//! - **Mass ceiling**: total weight must not exceed the capacity.
//! - **Category exclusivity**: at most one item per category.
//! - **Taboo pairs**: listed pairs may not be selected together.
//!
//! The rules are folded into a quadratic cost model as penalties, a
//! sampler searches for a low-energy assignment, and the result is
//! checked against the original data:
//!
//! ```text
//! InstanceGenerator -> Instance -> ModelBuilder -> CostModel
//!     -> Sampler (SaSampler | ExhaustiveSampler) -> SampleSet
//!     -> Evaluator -> Report
//! ```
//!
//! # Example
//!
//! ```
//! use u_qubo::instance::{Instance, Item};
//! use u_qubo::model::{Calibration, ModelBuilder, ModelConfig};
//! use u_qubo::solver::{ExhaustiveSampler, Sampler};
//! use u_qubo::evaluate::Evaluator;
//!
//! let instance = Instance::from_pairs(
//!     vec![Item::new(900, 30, 0), Item::new(800, 30, 0), Item::new(400, 20, 1)],
//!     &[(0, 2)],
//! ).unwrap();
//! let config = Calibration::default()
//!     .calibrate(&instance, &ModelConfig::default().with_capacity(100))
//!     .unwrap();
//! let model = ModelBuilder::new(&instance, &config).build().unwrap();
//! let samples = ExhaustiveSampler::new().sample(&model).unwrap();
//! let report = Evaluator::new(&instance, config.capacity).evaluate_best(&samples).unwrap();
//! assert!(report.category_ok && report.taboo_ok);
//! ```

pub mod config;
pub mod error;
pub mod evaluate;
pub mod instance;
pub mod model;
pub mod pipeline;
pub mod sa;
pub mod solver;

pub use error::{QuboError, Result};
