//! Terminal chart widgets.

pub mod linechart;

pub use linechart::axes::{
    required_width, x_labels, y_labels, Label, LabelValue, Value, XDetails, XScale, YDetails,
    YScale,
};
