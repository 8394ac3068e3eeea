//! Chart data model
//!
//! Input records as supplied by the caller, and their resolved plotted form.

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult};

/// One weekly average-rate record.
///
/// The rate arrives as decimal text and is parsed when the chart is built;
/// `month` and `week_of_month` are opaque labels, not calendar values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    pub month: String,
    pub week_of_month: String,
    pub avg_interest_rate: String,
}

impl RateRecord {
    /// Category label shown on the x axis, e.g. "1월 1주"
    pub fn x_label(&self) -> String {
        format!("{}월 {}주", self.month, self.week_of_month)
    }
}

/// A record resolved for plotting
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub x_label: String,
    pub y_value: f64,
}

/// Resolve records into plotted points, preserving input order.
///
/// Fails on the first rate that does not parse as a finite number, before
/// anything is rendered.
pub fn plot_points(records: &[RateRecord]) -> ChartResult<Vec<PlottedPoint>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let y_value: f64 = record.avg_interest_rate.trim().parse().map_err(|_| {
                ChartError::InvalidRate {
                    index,
                    value: record.avg_interest_rate.clone(),
                }
            })?;
            if !y_value.is_finite() {
                return Err(ChartError::InvalidRate {
                    index,
                    value: record.avg_interest_rate.clone(),
                });
            }
            Ok(PlottedPoint {
                x_label: record.x_label(),
                y_value,
            })
        })
        .collect()
}
