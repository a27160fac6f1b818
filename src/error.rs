//! Error taxonomy for the whole pipeline.

use thiserror::Error;

/// Errors raised while configuring, building, or sampling a model.
///
/// Rule violations in a returned selection are *not* errors; they are
/// reported as failed checks in [`Report`](crate::evaluate::Report).
#[derive(Debug, Error)]
pub enum QuboError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("instance has no items")]
    EmptyInstance,

    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("assignment has {actual} bits, model has {expected} variables")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid forbidden pair ({first}, {second}) for {len} items")]
    InvalidPair {
        first: usize,
        second: usize,
        len: usize,
    },

    #[error("sampler failed: {0}")]
    Solver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QuboError>;

impl QuboError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        QuboError::InvalidConfig(msg.into())
    }
}
