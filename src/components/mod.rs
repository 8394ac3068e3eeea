//! UI Components
//!
//! Leptos components for the rate chart.

pub mod line_chart;

pub use line_chart::RateLineChart;
