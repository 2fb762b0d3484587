//! Text reports and chart series derived from comparison results.
//!
//! Rendering is informational only; it never feeds back into the results.

pub mod human_summary;
pub mod series;

pub use human_summary::{
    format_lakhs, format_percentage, render_comparison_summary, render_range_summary,
};
pub use series::{ChangeSeries, CorrelationMatrix};
