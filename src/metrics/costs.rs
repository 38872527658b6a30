//! Costs: fixed per planted unit, never adjusted by conditions

use crate::data::{Crop, Farm};

/// Unit cost × number planted
pub fn cost_for_crop(crop: &Crop) -> f64 {
    crop.plant().costs * crop.num_crops
}

/// Sum of crop costs across the farm
pub fn total_cost(farm: &Farm) -> f64 {
    farm.crops.iter().fold(0.0, |acc, crop| acc + cost_for_crop(crop))
}
