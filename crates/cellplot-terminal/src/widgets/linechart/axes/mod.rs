//! Axes of the line chart.
//!
//! Computing the axes is split into three steps:
//! - [`scale`] maps data values to canvas pixels and back
//! - [`label`] decides which values get a label and where the text goes
//! - [`details`] places both axes inside the canvas area

pub mod details;
pub mod label;
pub mod scale;
mod value;

pub use details::{required_width, XDetails, YDetails, AXIS_WIDTH};
pub use label::{longest_label, x_labels, y_labels, Label, LabelValue};
pub use scale::{XScale, YScale};
pub use value::Value;

/// Default number of significant decimal places on axis labels.
pub const NON_ZERO_DECIMALS: i32 = 2;
