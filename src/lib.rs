//! # RateTrend UI
//!
//! Weekly average interest-rate line chart, built with Leptos (WASM).
//!
//! The crate is a single client-side rendered component plus the pure chart
//! math behind it: band/linear scales, per-render geometry, and tooltip
//! placement, all DOM-free and unit tested natively.
//!
//! ## Modules
//!
//! - [`chart`]: record model, scales, geometry, hover math
//! - [`components`]: Leptos components rendering the chart
//! - [`app`]: application shell with the sample dataset
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use leptos::*;
//! use ratetrend_ui::{RateLineChart, RateRecord};
//!
//! fn main() {
//!     let records = vec![RateRecord {
//!         month: "1".to_string(),
//!         week_of_month: "1".to_string(),
//!         avg_interest_rate: "3.77".to_string(),
//!     }];
//!     let (data, _) = create_signal(records);
//!     mount_to_body(move || view! { <RateLineChart data=data /> });
//! }
//! ```

pub mod app;
pub mod chart;
pub mod components;

// Re-export top-level types for convenience
pub use chart::{
    build_chart, ChartError, ChartGeometry, ChartResult, PlottedPoint, RateRecord, TooltipSide,
};

pub use components::RateLineChart;

pub use app::App;
