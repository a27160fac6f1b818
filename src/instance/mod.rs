//! Problem instances: items, forbidden pairs, and a seeded generator.
//!
//! An [`Instance`] is the fixed data every later stage reads from. The
//! generator is reproducible: the same [`InstanceConfig`] (seed included)
//! always yields the same item table and forbidden-pair set.

mod config;
mod generator;
mod types;

pub use config::InstanceConfig;
pub use generator::InstanceGenerator;
pub use types::{ForbiddenPair, Instance, Item};
