//! Farm Yield Rust Implementation
//!
//! Yield, cost, revenue and profit figures for crops, optionally adjusted by
//! environmental conditions (sun, wind, ...).
//!
//! - `data`: Plant, Crop, Farm, factor tables and environment readings
//! - `utils/`: Environmental adjustment factor resolution
//! - `metrics/`: Yield, cost, revenue and profit calculations
//! - `calculator`: `FarmCalculator` coordinator, reports, scenario comparison
//! - `report/`: Report types and JSON/Markdown formatters
//!
//! All calculations are pure: no I/O and no shared mutable state.

pub mod config;
pub mod error;
pub mod data;
pub mod utils;
pub mod metrics;
pub mod calculator;
pub mod report;

// Re-export commonly used types
pub use config::{CalculatorConfig, MissingLabelPolicy};
pub use error::{FarmError, Result};
pub use data::{ConditionAdjustments, Crop, EnvironmentReading, FactorTable, Farm, Plant};
pub use utils::{percent_to_multiplier, resolve_factor};
pub use metrics::*;
pub use calculator::FarmCalculator;
pub use report::{CropReport, FarmReport, JsonFormatter, MarkdownFormatter};
