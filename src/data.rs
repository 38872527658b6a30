//! Farm Data Model
//!
//! Plain, immutable records describing what is planted and how each plant
//! responds to its environment:
//! - `Plant`: static production profile (base yield, sale price, unit cost)
//! - `FactorTable`: factor name → condition label → percentage adjustment
//! - `Crop`: a quantity of one plant
//! - `Farm`: the ordered list of crops under evaluation
//! - `EnvironmentReading`: observed condition label per factor name
//!
//! Field names serialize in camelCase (`salePrice`, `numCrops`) so records can
//! be built from JSON documents by the caller.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Condition label → signed percentage adjustment (e.g. "high" → 50.0)
pub type ConditionAdjustments = FxHashMap<String, f64>;

/// Per-plant environmental sensitivity table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable {
    factors: FxHashMap<String, ConditionAdjustments>,
}

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the adjustments for one factor
    ///
    /// ```
    /// use farm_yield_rust::FactorTable;
    ///
    /// let table = FactorTable::new()
    ///     .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)]);
    /// assert_eq!(table.adjustment("sun", "high"), Some(50.0));
    /// ```
    pub fn with_factor<F, L, I>(mut self, factor: F, adjustments: I) -> Self
    where
        F: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let conditions = adjustments
            .into_iter()
            .map(|(label, pct)| (label.into(), pct))
            .collect();
        self.factors.insert(factor.into(), conditions);
        self
    }

    /// Adjustments defined for `factor`, if the plant is sensitive to it
    pub fn conditions(&self, factor: &str) -> Option<&ConditionAdjustments> {
        self.factors.get(factor)
    }

    /// Percentage adjustment for `factor` under `label`
    pub fn adjustment(&self, factor: &str, label: &str) -> Option<f64> {
        self.conditions(factor)?.get(label).copied()
    }
}

/// Static production profile for a species
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub name: String,

    /// Base yield per planted unit
    #[serde(rename = "yield", default)]
    pub base_yield: f64,

    /// Price per unit of yield
    #[serde(default)]
    pub sale_price: f64,

    /// Cost per planted unit
    #[serde(default)]
    pub costs: f64,

    /// Environmental sensitivity (None = unaffected by conditions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<FactorTable>,
}

impl Plant {
    pub fn new(name: impl Into<String>, base_yield: f64) -> Self {
        Self {
            name: name.into(),
            base_yield,
            ..Self::default()
        }
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = sale_price;
        self
    }

    pub fn with_costs(mut self, costs: f64) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_factor(mut self, factor: FactorTable) -> Self {
        self.factor = Some(factor);
        self
    }
}

/// A planted quantity of one plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// The plant being grown (field name kept from the historical record shape)
    pub crop: Plant,
    pub num_crops: f64,
}

impl Crop {
    pub fn new(plant: Plant, num_crops: f64) -> Self {
        Self { crop: plant, num_crops }
    }

    pub fn plant(&self) -> &Plant {
        &self.crop
    }
}

/// All crops under evaluation, in caller order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub crops: Vec<Crop>,
}

impl Farm {
    pub fn new(crops: Vec<Crop>) -> Self {
        Self { crops }
    }
}

impl FromIterator<Crop> for Farm {
    fn from_iter<I: IntoIterator<Item = Crop>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Observed condition per factor name, e.g. {sun: "high", wind: "low"}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentReading {
    conditions: FxHashMap<String, String>,
}

impl EnvironmentReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, factor: impl Into<String>, label: impl Into<String>) -> Self {
        self.conditions.insert(factor.into(), label.into());
        self
    }

    pub fn label(&self, factor: &str) -> Option<&str> {
        self.conditions.get(factor).map(String::as_str)
    }

    /// (factor, label) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.conditions
            .iter()
            .map(|(factor, label)| (factor.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<F, L> FromIterator<(F, L)> for EnvironmentReading
where
    F: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, L)>>(iter: I) -> Self {
        Self {
            conditions: iter
                .into_iter()
                .map(|(factor, label)| (factor.into(), label.into()))
                .collect(),
        }
    }
}
