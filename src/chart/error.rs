//! Chart error types
//!
//! Defines all errors that can occur while preparing chart geometry.

use thiserror::Error;

/// Errors that can occur while turning input records into a drawable chart
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A record's interest rate is not a finite number
    #[error("invalid interest rate {value:?} in record {index}")]
    InvalidRate { index: usize, value: String },
}

/// Result alias for chart construction
pub type ChartResult<T> = Result<T, ChartError>;
