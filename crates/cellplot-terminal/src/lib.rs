//! Axis scaling and label placement for terminal line charts.
//!
//! A line chart on a braille canvas has four pixels per cell row and two per
//! cell column. This crate computes everything the chart needs before it can
//! draw its axes:
//!
//! - [`YScale`] and [`XScale`] convert between data values and pixels
//! - [`y_labels`] and [`x_labels`] pick non-overlapping labels that fit
//! - [`YDetails`] and [`XDetails`] place the axes inside the canvas area
//!
//! Configuration lives in [`AxesConfig`], errors are reported as
//! [`AxisError`]. The crate emits `tracing` events but never installs a
//! subscriber.
//!
//! # Example
//!
//! ```
//! use cellplot_core::Rect;
//! use cellplot_terminal::{AxesConfig, XDetails, YDetails};
//!
//! let area = Rect::new(0, 0, 40, 12);
//! let config = AxesConfig::default().with_custom_x_label(0, "start");
//!
//! let y = YDetails::new(-3.0, 7.0, area, &config)?;
//! let x = XDetails::new(20, y.start, area, &config)?;
//! assert!(!y.labels.is_empty());
//! assert_eq!(x.labels[0].value.text(), "start");
//! # Ok::<(), cellplot_terminal::AxisError>(())
//! ```

pub mod canvas;
mod config;
mod error;
pub mod widgets;

pub use config::AxesConfig;
pub use error::AxisError;
pub use widgets::linechart::axes::NON_ZERO_DECIMALS;
pub use widgets::{
    required_width, x_labels, y_labels, Label, LabelValue, Value, XDetails, XScale, YDetails,
    YScale,
};
