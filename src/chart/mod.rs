//! Chart Core
//!
//! Everything needed to lay out the rate chart, kept free of DOM types so it
//! can be unit tested natively: the record model, band/linear scales, the
//! per-render geometry, and hover/tooltip placement.

pub mod data;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod scale;

pub use data::{plot_points, PlottedPoint, RateRecord};
pub use error::{ChartError, ChartResult};
pub use geometry::{
    build_chart, domain_padding, ChartGeometry, Margin, PointGeometry, XTick, YTick, MARGIN,
    REVEAL_SECONDS, TOTAL_HEIGHT,
};
pub use hover::{nearest_index, tooltip_layout, tooltip_side, TooltipLayout, TooltipSide};
pub use scale::{ticks, BandScale, LinearScale};
