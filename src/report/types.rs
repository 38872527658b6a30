//! Report structures produced by `FarmCalculator::evaluate`
//!
//! Figures derived from the environment can be NaN under
//! `MissingLabelPolicy::Propagate`. JSON has no NaN, so those figures are
//! written as `null` and read back as NaN.

use crate::data::EnvironmentReading;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// NaN-tolerant f64: non-finite ↔ `null`
mod nullable_f64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Figures for one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReport {
    pub plant: String,
    pub num_crops: f64,
    /// Adjustment factor applied to base yield (1.0 without a reading)
    #[serde(with = "nullable_f64")]
    pub factor: f64,
    #[serde(rename = "yield", with = "nullable_f64")]
    pub yield_amount: f64,
    pub cost: f64,
    #[serde(with = "nullable_f64")]
    pub revenue: f64,
    #[serde(with = "nullable_f64")]
    pub profit: f64,
}

/// Whole-farm breakdown under one (optional) reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<EnvironmentReading>,
    pub crops: Vec<CropReport>,
    #[serde(with = "nullable_f64")]
    pub total_yield: f64,
    pub total_cost: f64,
    #[serde(with = "nullable_f64")]
    pub total_revenue: f64,
    #[serde(with = "nullable_f64")]
    pub total_profit: f64,
}

impl FarmReport {
    /// Build a report, folding totals over `crops` in order from 0.0
    pub fn from_crops(crops: Vec<CropReport>, reading: Option<EnvironmentReading>) -> Self {
        let (mut total_yield, mut total_cost, mut total_revenue, mut total_profit) =
            (0.0, 0.0, 0.0, 0.0);

        for crop in &crops {
            total_yield += crop.yield_amount;
            total_cost += crop.cost;
            total_revenue += crop.revenue;
            total_profit += crop.profit;
        }

        Self {
            reading,
            crops,
            total_yield,
            total_cost,
            total_revenue,
            total_profit,
        }
    }

    /// Crop with the highest profit (None for an empty farm or all-NaN profits)
    pub fn most_profitable(&self) -> Option<&CropReport> {
        self.crops
            .iter()
            .filter(|c| !c.profit.is_nan())
            .max_by(|a, b| a.profit.total_cmp(&b.profit))
    }
}
