//! Run configuration loaded from TOML.
//!
//! Every section is optional and falls back to its defaults:
//!
//! ```
//! use u_qubo::config::RunConfig;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     [instance]
//!     num_items = 30
//!     seed = 11
//!
//!     [model]
//!     capacity = 400
//!
//!     [calibration]
//!     margin = 2.0
//!
//!     [sampler]
//!     num_reads = 10
//!     seed = 1
//! "#).unwrap();
//!
//! assert_eq!(config.instance.num_items, 30);
//! assert_eq!(config.model.capacity, 400);
//! assert_eq!(config.sampler.num_reads, 10);
//! ```

use crate::error::Result;
use crate::instance::InstanceConfig;
use crate::model::{Calibration, ModelConfig};
use crate::sa::SaConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub instance: InstanceConfig,

    /// Objective weight and capacity; the three penalties are used as
    /// given only when `calibrate` is false.
    pub model: ModelConfig,

    /// Replace the configured penalties with calibrated ones.
    pub calibrate: bool,

    pub calibration: Calibration,

    pub sampler: SaConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            instance: InstanceConfig::default(),
            model: ModelConfig::default(),
            calibrate: true,
            calibration: Calibration::default(),
            sampler: SaConfig::default(),
        }
    }
}

impl RunConfig {
    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Uses the configured penalties verbatim.
    pub fn with_manual_penalties(mut self) -> Self {
        self.calibrate = false;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.instance.validate()?;
        self.model.validate()?;
        if self.calibrate {
            self.calibration.validate()?;
        }
        self.sampler.validate()
    }
}
