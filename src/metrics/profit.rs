//! Profit: revenue minus cost, per crop and farm-wide
//!
//! Losses are reported as negative profit; nothing is clamped here.

use crate::config::CalculatorConfig;
use crate::data::{Crop, EnvironmentReading, Farm};
use crate::error::Result;
use super::costs::cost_for_crop;
use super::revenue::revenue_for_crop;

pub fn profit_for_crop(
    crop: &Crop,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    Ok(revenue_for_crop(crop, reading, config)? - cost_for_crop(crop))
}

/// Sum of crop profits across the farm (0.0 for an empty farm)
pub fn total_profit(
    farm: &Farm,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let total = farm.crops.iter().try_fold(0.0, |acc, crop| {
        profit_for_crop(crop, reading, config).map(|p| acc + p)
    })?;

    tracing::debug!("Total profit over {} crops: {}", farm.crops.len(), total);
    Ok(total)
}
