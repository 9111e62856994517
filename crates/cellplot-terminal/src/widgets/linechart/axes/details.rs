//! Placement of the axes on the canvas.

use super::label::{longest_label, x_labels, y_labels, Label, LabelValue};
use super::scale::{XScale, YScale};
use super::value::Value;
use crate::config::AxesConfig;
use crate::error::AxisError;
use cellplot_core::{Point, Rect};

/// Width of the Y axis line in cells.
pub const AXIS_WIDTH: i32 = 1;

/// Minimum canvas height for the X axis: one graph row, the axis and the
/// labels.
pub const MIN_X_AXIS_HEIGHT: i32 = 3;

/// Estimates the width the Y axis and its labels need for data in
/// `[min, max]`.
#[must_use]
pub fn required_width(min: f64, max: f64, non_zero_decimals: i32) -> i32 {
    let bounds = [min, max].map(|v| Label {
        value: LabelValue::Number(Value::new(v, non_zero_decimals)),
        position: Point::ORIGIN,
    });
    longest_label(&bounds) + AXIS_WIDTH
}

/// The Y axis with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct YDetails {
    /// Width of the axis including its labels.
    pub width: i32,
    /// Top end of the axis line.
    pub start: Point,
    /// Bottom end of the axis line.
    pub end: Point,
    /// Scale of the axis.
    pub scale: YScale,
    /// Labels, bottom first.
    pub labels: Vec<Label>,
}

impl YDetails {
    /// Places the Y axis on the left edge of `area`.
    ///
    /// The bottom two rows of the area are left for the X axis and its
    /// labels. The axis is as wide as its longest label plus the axis line,
    /// but never wider than the area.
    pub fn new(min: f64, max: f64, area: Rect, config: &AxesConfig) -> Result<Self, AxisError> {
        let graph_height = area.height() - 2;
        let scale = YScale::new(min, max, graph_height, config.non_zero_decimals)?;

        // Labels laid out on the whole width tell how wide the axis has to be.
        // Labels wider than the area get the whole area and are trimmed.
        let max_label_width = area.width() - AXIS_WIDTH;
        let labels = y_labels(&scale, max_label_width)?;
        let label_width = longest_label(&labels).min(max_label_width).max(1);
        let width = label_width + AXIS_WIDTH;
        let labels = y_labels(&scale, label_width)?;

        tracing::debug!(graph_height, width, labels = labels.len(), "y axis details");
        Ok(Self {
            width,
            start: Point::new(width - 1, 0),
            end: Point::new(width - 1, graph_height),
            scale,
            labels,
        })
    }
}

/// The X axis with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct XDetails {
    /// Left end of the axis line.
    pub start: Point,
    /// Right end of the axis line.
    pub end: Point,
    /// Scale of the axis.
    pub scale: XScale,
    /// Labels, left to right.
    pub labels: Vec<Label>,
}

impl XDetails {
    /// Places the X axis along the bottom of `area`, starting where the Y
    /// axis (`y_start`) is drawn.
    pub fn new(
        num_points: i32,
        y_start: Point,
        area: Rect,
        config: &AxesConfig,
    ) -> Result<Self, AxisError> {
        if area.height() < MIN_X_AXIS_HEIGHT {
            return Err(AxisError::InvalidSize {
                what: "canvas height",
                min: MIN_X_AXIS_HEIGHT,
                got: area.height(),
            });
        }

        let graph_width = area.width() - y_start.x - 1;
        let scale = XScale::new(num_points, graph_width, config.non_zero_decimals)?;

        let graph_zero = Point::new(y_start.x + 1, area.height() - 3);
        let labels = x_labels(&scale, graph_zero, &config.custom_x_labels)?;

        tracing::debug!(graph_width, labels = labels.len(), "x axis details");
        Ok(Self {
            start: Point::new(y_start.x, area.height() - 2),
            end: Point::new(y_start.x + graph_width, area.height() - 2),
            scale,
            labels,
        })
    }
}
