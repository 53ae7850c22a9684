//! Error types for simulation construction.
//!
//! Everything that runs per frame is total; only building a simulation from a
//! config can fail.

use thiserror::Error;

/// Errors raised while parsing or validating a [`SimConfig`](super::config::SimConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON config could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A capacity of zero leaves nothing to explode.
    #[error("particle capacity must be greater than zero")]
    ZeroCapacity,

    /// The capacity does not fill a cubic lattice exactly.
    #[error("particle capacity {capacity} is not a perfect cube (nearest: {lower} or {upper})")]
    CapacityNotCube {
        capacity: usize,
        lower: usize,
        upper: usize,
    },

    /// A numeric field is outside its accepted range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
