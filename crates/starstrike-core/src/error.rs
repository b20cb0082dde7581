//! Error types.
//!
//! The simulation itself has no failure modes; the only fallible surface is
//! loading tuning parameters from text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("tuning field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
