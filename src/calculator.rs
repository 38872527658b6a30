//! Farm Calculator - Main coordinator for farm figures
//!
//! Holds a `CalculatorConfig` and exposes every calculation with the config
//! already applied, plus whole-farm reports and parallel (Rayon) comparison
//! of one farm under several environment readings.

use crate::config::CalculatorConfig;
use crate::data::{Crop, EnvironmentReading, Farm, Plant};
use crate::error::Result;
use crate::metrics::*;
use crate::report::{CropReport, FarmReport};
use crate::utils::resolve_factor;
use rayon::prelude::*;
use std::path::Path;

/// Main farm calculator
#[derive(Debug, Clone, Default)]
pub struct FarmCalculator {
    config: CalculatorConfig,
}

impl FarmCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Create a calculator from a JSON config file
    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(CalculatorConfig::load(path)?))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Adjustment factor for `plant` under `reading` (1.0 = unadjusted)
    pub fn resolve_factor(&self, plant: &Plant, reading: &EnvironmentReading) -> Result<f64> {
        resolve_factor(plant, reading, &self.config)
    }

    pub fn yield_for_plant(&self, plant: &Plant, reading: Option<&EnvironmentReading>) -> Result<f64> {
        yield_for_plant(plant, reading, &self.config)
    }

    pub fn yield_for_crop(&self, crop: &Crop, reading: Option<&EnvironmentReading>) -> Result<f64> {
        yield_for_crop(crop, reading, &self.config)
    }

    pub fn total_yield(&self, farm: &Farm, reading: Option<&EnvironmentReading>) -> Result<f64> {
        total_yield(farm, reading, &self.config)
    }

    pub fn cost_for_crop(&self, crop: &Crop) -> f64 {
        cost_for_crop(crop)
    }

    pub fn total_cost(&self, farm: &Farm) -> f64 {
        total_cost(farm)
    }

    pub fn revenue_for_crop(&self, crop: &Crop, reading: Option<&EnvironmentReading>) -> Result<f64> {
        revenue_for_crop(crop, reading, &self.config)
    }

    pub fn total_revenue(&self, farm: &Farm, reading: Option<&EnvironmentReading>) -> Result<f64> {
        total_revenue(farm, reading, &self.config)
    }

    pub fn profit_for_crop(&self, crop: &Crop, reading: Option<&EnvironmentReading>) -> Result<f64> {
        profit_for_crop(crop, reading, &self.config)
    }

    pub fn total_profit(&self, farm: &Farm, reading: Option<&EnvironmentReading>) -> Result<f64> {
        total_profit(farm, reading, &self.config)
    }

    /// Per-crop breakdown plus farm totals
    ///
    /// Totals are folded over the per-crop figures in farm order, so they
    /// equal `total_yield`/`total_profit` for the same inputs.
    pub fn evaluate(&self, farm: &Farm, reading: Option<&EnvironmentReading>) -> Result<FarmReport> {
        let crops = farm
            .crops
            .iter()
            .map(|crop| self.evaluate_crop(crop, reading))
            .collect::<Result<Vec<_>>>()?;

        let report = FarmReport::from_crops(crops, reading.cloned());

        tracing::debug!(
            "Evaluated {} crops: yield {}, cost {}, revenue {}, profit {}",
            report.crops.len(),
            report.total_yield,
            report.total_cost,
            report.total_revenue,
            report.total_profit
        );

        Ok(report)
    }

    fn evaluate_crop(&self, crop: &Crop, reading: Option<&EnvironmentReading>) -> Result<CropReport> {
        let plant = crop.plant();

        // Same arithmetic as yield_for_crop, with the factor resolved once
        let factor = match reading {
            Some(reading) => self.resolve_factor(plant, reading)?,
            None => 1.0,
        };
        let yield_amount = plant.base_yield * factor * crop.num_crops;
        let cost = cost_for_crop(crop);
        let revenue = yield_amount * plant.sale_price;

        Ok(CropReport {
            plant: plant.name.clone(),
            num_crops: crop.num_crops,
            factor,
            yield_amount,
            cost,
            revenue,
            profit: revenue - cost,
        })
    }

    /// Evaluate one farm under several readings IN PARALLEL
    ///
    /// Reports come back in the order of `readings`. If any reading fails, the
    /// error returned is the one for the earliest failing reading.
    pub fn evaluate_scenarios(
        &self,
        farm: &Farm,
        readings: &[EnvironmentReading],
    ) -> Result<Vec<FarmReport>> {
        tracing::debug!("Evaluating {} scenarios over {} crops", readings.len(), farm.crops.len());

        let results: Vec<Result<FarmReport>> = readings
            .par_iter()
            .map(|reading| self.evaluate(farm, Some(reading)))
            .collect();

        results.into_iter().collect()
    }
}
