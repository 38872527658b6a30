//! Revenue: crop yield × sale price

use crate::config::CalculatorConfig;
use crate::data::{Crop, EnvironmentReading, Farm};
use crate::error::Result;
use super::yields::yield_for_crop;

pub fn revenue_for_crop(
    crop: &Crop,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    Ok(yield_for_crop(crop, reading, config)? * crop.plant().sale_price)
}

/// Sum of crop revenues across the farm
pub fn total_revenue(
    farm: &Farm,
    reading: Option<&EnvironmentReading>,
    config: &CalculatorConfig,
) -> Result<f64> {
    farm.crops.iter().try_fold(0.0, |acc, crop| {
        revenue_for_crop(crop, reading, config).map(|r| acc + r)
    })
}
