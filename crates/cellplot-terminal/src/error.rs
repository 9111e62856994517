//! Error types for cellplot-terminal.

use cellplot_core::AlignError;
use thiserror::Error;

/// Errors produced while computing axis scales and labels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    /// The data range is inverted or the point count is negative.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A canvas dimension is too small.
    #[error("invalid size: {what} must be at least {min}, got {got}")]
    InvalidSize {
        what: &'static str,
        min: i32,
        got: i32,
    },

    /// A coordinate or value falls outside the scale's domain.
    #[error("out of bounds: {what} {value} must be in range {min} <= {what} <= {max}")]
    OutOfBounds {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A label could not be aligned.
    #[error(transparent)]
    Align(#[from] AlignError),
}

impl AxisError {
    pub(crate) fn out_of_bounds(
        what: &'static str,
        value: impl Into<f64>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Self {
        Self::OutOfBounds {
            what,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}
