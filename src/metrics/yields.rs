//! Yield: per plant, per crop, and farm-wide
//!
//! Without a reading the base yield is used as-is. With one, the plant's
//! adjustment factor scales it, then the crop quantity scales that.

use crate::config::CalculatorConfig;
use crate::data::{Crop, EnvironmentReading, Farm, Plant};
use crate::error::Result;
use crate::utils::resolve_factor;

/// Yield of one planted unit, adjusted for `reading` when present
pub fn yield_for_plant(
    plant: &Plant,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    match reading {
        Some(reading) => Ok(plant.base_yield * resolve_factor(plant, reading, config)?),
        None => Ok(plant.base_yield),
    }
}

/// Plant yield × number planted
pub fn yield_for_crop(
    crop: &Crop,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    Ok(yield_for_plant(crop.plant(), reading, config)? * crop.num_crops)
}

/// Sum of crop yields across the farm (0.0 for an empty farm)
pub fn total_yield(
    farm: &Farm,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let total = farm.crops.iter().try_fold(0.0, |acc, crop| {
        yield_for_crop(crop, reading, config).map(|y| acc + y)
    })?;

    tracing::debug!("Total yield over {} crops: {}", farm.crops.len(), total);
    Ok(total)
}
