//! Sampler contract and the exact minimizer.
//!
//! The annealer in [`sa`](crate::sa) and the [`ExhaustiveSampler`] both
//! implement [`Sampler`]; the pipeline takes any of them.

mod exhaustive;
mod types;

pub use exhaustive::{ExhaustiveSampler, MAX_EXHAUSTIVE_VARIABLES};
pub use types::{Sample, SampleSet, Sampler};
