//! Environmental Adjustment
//!
//! Turns a plant's factor table and an environment reading into a single
//! multiplicative factor applied to base yield.
//!
//! Each matching factor contributes `(100 + pct) / 100`; contributions are
//! multiplied together starting from 1.0, so the order in which factors are
//! visited does not matter.

use crate::config::{CalculatorConfig, MissingLabelPolicy};
use crate::data::{EnvironmentReading, Plant};
use crate::error::{FarmError, Result};

/// Convert a signed percentage adjustment to a multiplier
///
/// # Examples
/// - 50.0 → 1.5
/// - 0.0 → 1.0
/// - -25.0 → 0.75
pub fn percent_to_multiplier(pct: f64) -> f64 {
    (100.0 + pct) / 100.0
}

/// Resolve the adjustment factor for `plant` under `reading`
///
/// Factor names the plant does not define are skipped. A label the plant does
/// not define for a factor it *does* define is handled by
/// `config.missing_label`.
pub fn resolve_factor(
    plant: &Plant,
    reading: &EnvironmentReading,
    config: &CalculatorConfig,
) -> Result<f64> {
    let Some(table) = plant.factor.as_ref() else {
        return Ok(1.0);
    };

    let mut factor = 1.0;

    for (name, label) in reading.iter() {
        let Some(conditions) = table.conditions(name) else {
            tracing::trace!("{}: no sensitivity to '{}', skipping", plant.name, name);
            continue;
        };

        let multiplier = match conditions.get(label) {
            Some(&pct) => percent_to_multiplier(pct),
            None => match config.missing_label {
                MissingLabelPolicy::Error => {
                    return Err(FarmError::MissingFactorLabel {
                        plant: plant.name.clone(),
                        factor: name.to_string(),
                        label: label.to_string(),
                    });
                }
                MissingLabelPolicy::Propagate => {
                    tracing::warn!(
                        "{}: no adjustment for {} = '{}', result will be NaN",
                        plant.name, name, label
                    );
                    f64::NAN
                }
                MissingLabelPolicy::Ignore => {
                    tracing::debug!(
                        "{}: no adjustment for {} = '{}', leaving unadjusted",
                        plant.name, name, label
                    );
                    1.0
                }
            },
        };

        factor *= multiplier;
    }

    // NaN compares false, so a propagated NaN survives the clamp
    if config.clamp_negative_factor && factor < 0.0 {
        factor = 0.0;
    }

    Ok(factor)
}
