//! Utility modules for farm calculations
//!
//! - Adjustment: percentage → multiplier conversion and factor resolution

pub mod adjustment;

// Re-export commonly used functions
pub use adjustment::{percent_to_multiplier, resolve_factor};
