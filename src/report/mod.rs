//! Farm reports
//!
//! Per-crop breakdowns with farm totals, and formatters rendering them as
//! JSON or Markdown.

pub mod types;
pub mod formatters;

pub use types::{CropReport, FarmReport};
pub use formatters::{JsonFormatter, MarkdownFormatter};
