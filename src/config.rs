//! Calculator Configuration
//!
//! Controls the two behaviours the arithmetic leaves open:
//! - what happens when a reading names a label the plant's factor table lacks
//! - whether a negative adjustment factor is clamped to zero
//!
//! Loaded from JSON; every field is optional and defaults to the strict,
//! unclamped behaviour.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Handling of a condition label missing from a plant's factor table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Fail with `FarmError::MissingFactorLabel`
    #[default]
    Error,
    /// Multiply by NaN, poisoning every figure derived from the plant
    Propagate,
    /// Leave the factor unadjusted (multiplier 1)
    Ignore,
}

/// Calculator options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub missing_label: MissingLabelPolicy,

    /// Clamp the resolved adjustment factor to zero when it falls below zero
    /// (adjustments under -100%). Only the factor is clamped: a negative base
    /// yield or quantity still produces a negative yield.
    pub clamp_negative_factor: bool,
}

impl CalculatorConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calculator config: {:?}", path))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Invalid calculator config: {:?}", path))?;

        tracing::info!(
            "Loaded calculator config from {:?} (missing_label = {:?}, clamp_negative_factor = {})",
            path,
            config.missing_label,
            config.clamp_negative_factor
        );

        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse calculator config JSON")
    }

    pub fn with_missing_label(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_label = policy;
        self
    }

    pub fn with_clamp_negative_factor(mut self, clamp: bool) -> Self {
        self.clamp_negative_factor = clamp;
        self
    }
}
