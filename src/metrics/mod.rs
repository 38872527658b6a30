//! Metric modules for farm calculations
//!
//! Each figure is implemented in its own module. Every function that can be
//! affected by the environment takes an optional reading and the calculator
//! config; costs take neither.

pub mod yields;
pub mod costs;
pub mod revenue;
pub mod profit;

// Re-export metric functions
pub use yields::{yield_for_plant, yield_for_crop, total_yield};
pub use costs::{cost_for_crop, total_cost};
pub use revenue::{revenue_for_crop, total_revenue};
pub use profit::{profit_for_crop, total_profit};
