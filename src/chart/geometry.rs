//! Chart geometry
//!
//! Pure layout: everything the SVG view needs, computed from the input
//! records and the observed container width. A geometry is rebuilt from
//! scratch on every data or width change; nothing here survives between
//! renders.

use super::data::{plot_points, RateRecord};
use super::error::ChartResult;
use super::scale::{BandScale, LinearScale};

/// Fixed margins around the drawable area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 40.0,
    right: 40.0,
    bottom: 40.0,
    left: 40.0,
};

/// Total SVG height; the drawable height is this minus the vertical margins
pub const TOTAL_HEIGHT: f64 = 400.0;

/// Gap fraction between x bands
const BAND_PADDING: f64 = 0.1;

/// Requested y tick count; gridlines and axis labels share these ticks
const Y_TICK_COUNT: usize = 4;

/// Line reveal animation duration in seconds
pub const REVEAL_SECONDS: f64 = 1.5;

/// A data point positioned in drawable-area pixels
#[derive(Clone, Debug, PartialEq)]
pub struct PointGeometry {
    pub x_label: String,
    pub y_value: f64,
    /// Band-center x
    pub x: f64,
    /// Pixel y, 0 at the top
    pub y: f64,
}

/// An x-axis category tick: one per distinct band, in input order
#[derive(Clone, Debug, PartialEq)]
pub struct XTick {
    pub label: String,
    /// Band-center x
    pub x: f64,
}

/// A y tick with its pixel position; gridlines are drawn at the same ys
#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Fully computed chart layout for one render
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Drawable width (container width minus horizontal margins)
    pub width: f64,
    /// Drawable height
    pub height: f64,
    /// Points in input order
    pub points: Vec<PointGeometry>,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
    /// y domain after quarter-range padding
    pub y_domain: (f64, f64),
    /// SVG path through the points
    pub line_path: String,
    /// Total polyline length; drives the stroke-dash reveal
    pub line_length: f64,
}

/// Quarter-range domain padding, rounded to 2 decimals
pub fn domain_padding(min: f64, max: f64) -> f64 {
    ((max - min) / 4.0 * 100.0).round() / 100.0
}

/// Compute the full chart geometry.
///
/// Returns `Ok(None)` when there is nothing to draw: no records, or a
/// container too narrow to leave any drawable width.
pub fn build_chart(
    records: &[RateRecord],
    container_width: f64,
) -> ChartResult<Option<ChartGeometry>> {
    let width = container_width - MARGIN.left - MARGIN.right;
    let height = TOTAL_HEIGHT - MARGIN.top - MARGIN.bottom;
    if records.is_empty() || width <= 0.0 {
        return Ok(None);
    }

    let plotted = plot_points(records)?;

    let x = BandScale::new(
        plotted.iter().map(|p| p.x_label.clone()).collect(),
        (0.0, width),
        BAND_PADDING,
    );

    let y_min = plotted.iter().map(|p| p.y_value).fold(f64::INFINITY, f64::min);
    let y_max = plotted
        .iter()
        .map(|p| p.y_value)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = domain_padding(y_min, y_max);
    let y_domain = (y_min - padding, y_max + padding);
    // Inverted pixel range: the domain max sits at the top
    let y = LinearScale::new(y_domain, (height, 0.0));

    let points: Vec<PointGeometry> = plotted
        .iter()
        .map(|p| PointGeometry {
            x_label: p.x_label.clone(),
            y_value: p.y_value,
            // The domain was built from these labels, so the lookup holds
            x: x.center_of(&p.x_label).expect("label is in the band domain"),
            y: y.scale(p.y_value),
        })
        .collect();

    let x_ticks = x
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| XTick {
            label: label.clone(),
            x: x.center(index),
        })
        .collect();

    let y_ticks = y
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|value| YTick {
            value,
            y: y.scale(value),
            label: format!("{:.2}%", value),
        })
        .collect();

    let line_path = line_path(&points);
    let line_length = polyline_length(&points);

    Ok(Some(ChartGeometry {
        width,
        height,
        points,
        x_ticks,
        y_ticks,
        y_domain,
        line_path,
        line_length,
    }))
}

/// SVG path through the points: straight segments in input order
fn line_path(points: &[PointGeometry]) -> String {
    let mut d = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{},{}", command, point.x, point.y));
    }
    d
}

/// Total length of the polyline; exact for straight segments
fn polyline_length(points: &[PointGeometry]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y))
        .sum()
}
