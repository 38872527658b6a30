//! Error types for farm calculations
//!
//! Only one calculation failure exists: an environment reading that names a
//! condition label the plant's factor table does not define. Configuration
//! loading uses `anyhow` at the file boundary instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
    /// The plant defines `factor`, but not the `label` the reading asked for.
    #[error("plant '{plant}' has no adjustment for {factor} = '{label}'")]
    MissingFactorLabel {
        plant: String,
        factor: String,
        label: String,
    },
}

pub type Result<T> = std::result::Result<T, FarmError>;
