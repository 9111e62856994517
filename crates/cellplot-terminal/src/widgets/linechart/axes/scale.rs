//! Scales of the line chart axes.
//!
//! A scale maps data values onto the braille pixels of the graph area and
//! back. Both axes reserve one pixel for the zero value, so a graph `n`
//! pixels tall has `n - 1` steps.

use super::value::Value;
use crate::canvas::braille::{COL_MULT, ROW_MULT};
use crate::error::AxisError;
use cellplot_core::numbers;

/// Scale of the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YScale {
    /// Minimum value on the axis.
    pub min: Value,
    /// Maximum value on the axis.
    pub max: Value,
    /// Value difference between two adjacent pixel rows.
    pub step: Value,
    /// Height in cells of the graph area.
    pub graph_height: i32,
    pixel_height: i32,
}

impl YScale {
    /// Computes the scale for data in `[min, max]` drawn on a graph that is
    /// `graph_height` cells tall.
    ///
    /// The axis always includes zero: strictly positive data starts the
    /// scale at zero and strictly negative data ends it at zero.
    pub fn new(
        min: f64,
        max: f64,
        graph_height: i32,
        non_zero_decimals: i32,
    ) -> Result<Self, AxisError> {
        if max < min {
            return Err(AxisError::InvalidRange(format!(
                "max({max}) cannot be less than min({min})"
            )));
        }
        if graph_height < 1 {
            return Err(AxisError::InvalidSize {
                what: "graph height",
                min: 1,
                got: graph_height,
            });
        }

        let pixel_height = graph_height
            .checked_mul(ROW_MULT)
            .ok_or(AxisError::InvalidSize {
                what: "graph height",
                min: 1,
                got: graph_height,
            })?;
        let usable = pixel_height - 1;

        let min = min.min(0.0);
        let max = max.max(0.0);
        let step = Value::new((max - min) / f64::from(usable), non_zero_decimals);
        Ok(Self {
            min: Value::new(min, non_zero_decimals),
            max: Value::new(max, non_zero_decimals),
            step,
            graph_height,
            pixel_height,
        })
    }

    /// Height of the graph area in pixels.
    #[must_use]
    pub const fn pixel_height(&self) -> i32 {
        self.pixel_height
    }

    /// Returns the value of the pixel row `y`. Y coordinates grow down.
    pub fn pixel_to_value(&self, y: i32) -> Result<f64, AxisError> {
        let pos = y_to_position(y, self.pixel_height)?;
        if pos == 0 {
            return Ok(self.min.rounded());
        }
        if pos == self.pixel_height - 1 {
            return Ok(self.max.rounded());
        }

        let v = f64::from(pos) * self.step.rounded();
        if self.min.raw() < 0.0 {
            Ok(v + self.min.raw())
        } else {
            Ok(v)
        }
    }

    /// Returns the pixel row that most closely represents `v`. Y coordinates
    /// grow down.
    pub fn value_to_pixel(&self, v: f64) -> Result<i32, AxisError> {
        if self.step.rounded() == 0.0 {
            return Ok(0);
        }

        let v = if self.min.raw() < 0.0 { v - self.min.raw() } else { v };
        let pos = numbers::round(v / self.step.rounded()) as i32;
        position_to_y(pos, self.pixel_height)
    }

    /// Returns the label value for the cell row `y`, rounded with the
    /// precision of the scale. Y coordinates grow down.
    pub fn cell_label(&self, y: i32) -> Result<Value, AxisError> {
        let pos = y_to_position(y, self.graph_height)?;
        let pixel_y = position_to_y(pos * ROW_MULT, self.pixel_height)?;
        let v = self.pixel_to_value(pixel_y)?;
        Ok(Value::new(v, self.min.non_zero_decimals()))
    }
}

/// Scale of the X axis. The domain is the indices of the data points.
#[derive(Debug, Clone, PartialEq)]
pub struct XScale {
    /// Minimum value on the axis, always zero.
    pub min: Value,
    /// Maximum value on the axis, the index of the last point.
    pub max: Value,
    /// Value difference between two adjacent pixel columns.
    pub step: Value,
    /// Width in cells of the graph area.
    pub graph_width: i32,
    pixel_width: i32,
}

impl XScale {
    /// Computes the scale for `num_points` data points drawn on a graph that
    /// is `graph_width` cells wide.
    pub fn new(
        num_points: i32,
        graph_width: i32,
        non_zero_decimals: i32,
    ) -> Result<Self, AxisError> {
        if num_points < 0 {
            return Err(AxisError::InvalidRange(format!(
                "number of points cannot be negative, got {num_points}"
            )));
        }
        if graph_width < 1 {
            return Err(AxisError::InvalidSize {
                what: "graph width",
                min: 1,
                got: graph_width,
            });
        }

        let pixel_width = graph_width
            .checked_mul(COL_MULT)
            .ok_or(AxisError::InvalidSize {
                what: "graph width",
                min: 1,
                got: graph_width,
            })?;
        let usable = pixel_width - 1;

        let max = f64::from((num_points - 1).max(0));
        let step = Value::new(max / f64::from(usable), non_zero_decimals);
        Ok(Self {
            min: Value::new(0.0, non_zero_decimals),
            max: Value::new(max, non_zero_decimals),
            step,
            graph_width,
            pixel_width,
        })
    }

    /// Width of the graph area in pixels.
    #[must_use]
    pub const fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// Returns the value of the pixel column `x`. X coordinates grow right.
    pub fn pixel_to_value(&self, x: i32) -> Result<f64, AxisError> {
        if !(0..self.pixel_width).contains(&x) {
            return Err(AxisError::out_of_bounds("x", x, 0, self.pixel_width - 1));
        }

        if x == 0 {
            Ok(self.min.rounded())
        } else if x == self.pixel_width - 1 {
            Ok(self.max.rounded())
        } else {
            Ok(f64::from(x) * self.step.rounded())
        }
    }

    /// Returns the pixel column that most closely represents the point
    /// index `v`. X coordinates grow right.
    pub fn value_to_pixel(&self, v: i32) -> Result<i32, AxisError> {
        let fv = f64::from(v);
        if fv < self.min.raw() || fv > self.max.rounded() {
            return Err(AxisError::out_of_bounds(
                "value",
                fv,
                self.min.raw(),
                self.max.rounded(),
            ));
        }
        if self.step.rounded() == 0.0 {
            return Ok(0);
        }
        Ok(numbers::round(fv / self.step.rounded()) as i32)
    }

    /// Returns the cell column that contains the pixel of point index `v`.
    pub fn value_to_cell(&self, v: i32) -> Result<i32, AxisError> {
        Ok(self.value_to_pixel(v)? / COL_MULT)
    }

    /// Returns the label value for the cell column `x`, rounded half away
    /// from zero to a whole point index. The step is rounded up, so columns
    /// near the right edge are capped at the last index.
    pub fn cell_label(&self, x: i32) -> Result<Value, AxisError> {
        let v = self.pixel_to_value(x * COL_MULT)?;
        let index = numbers::round(v).min(self.max.rounded());
        Ok(Value::new(index, self.min.non_zero_decimals()))
    }
}

/// Converts a position counted from the bottom into a Y coordinate counted
/// from the top of an area `height` pixels (or cells) tall.
///
/// ```text
/// position   y
///        2   0
///        1   1
///        0   2
/// ```
fn position_to_y(pos: i32, height: i32) -> Result<i32, AxisError> {
    let max = height - 1;
    if !(0..=max).contains(&pos) {
        return Err(AxisError::out_of_bounds("position", pos, 0, max));
    }
    Ok(max - pos)
}

/// Inverse of [`position_to_y`].
fn y_to_position(y: i32, height: i32) -> Result<i32, AxisError> {
    let max = height - 1;
    if !(0..=max).contains(&y) {
        return Err(AxisError::out_of_bounds("y", y, 0, max));
    }
    Ok(max - y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NON_ZERO_DECIMALS: i32 = 2;

    #[test]
    fn test_y_scale_rejects_inverted_range() {
        let err = YScale::new(1.0, 0.0, 4, NON_ZERO_DECIMALS).unwrap_err();
        assert!(matches!(err, AxisError::InvalidRange(_)));
    }

    #[test]
    fn test_y_scale_rejects_empty_height() {
        let err = YScale::new(0.0, 1.0, 0, NON_ZERO_DECIMALS).unwrap_err();
        assert!(matches!(err, AxisError::InvalidSize { got: 0, .. }));
    }

    #[test]
    fn test_y_scale_positive_data_starts_at_zero() {
        let scale = YScale::new(5.0, 5.0, 2, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.min, Value::new(0.0, NON_ZERO_DECIMALS));
        assert_eq!(scale.max, Value::new(5.0, NON_ZERO_DECIMALS));
        assert_eq!(scale.step.rounded(), 0.72);
        assert_eq!(scale.pixel_height(), 8);
    }

    #[test]
    fn test_y_scale_negative_data_ends_at_zero() {
        let scale = YScale::new(-10.0, -2.0, 3, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.min.raw(), -10.0);
        assert_eq!(scale.max.raw(), 0.0);
        assert_eq!(scale.step.rounded(), 0.91);
    }

    #[test]
    fn test_y_scale_mixed_data_is_unchanged() {
        let scale = YScale::new(-5.0, 5.0, 4, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.min.raw(), -5.0);
        assert_eq!(scale.max.raw(), 5.0);
        assert_eq!(scale.step.rounded(), 0.67);
    }

    #[test]
    fn test_y_pixel_to_value() {
        let scale = YScale::new(0.0, 5.0, 2, NON_ZERO_DECIMALS).expect("valid scale");
        let cases = [(7, 0.0), (6, 0.72), (3, 2.88), (0, 5.0)];
        for (y, want) in cases {
            assert_eq!(scale.pixel_to_value(y), Ok(want), "pixel_to_value({y})");
        }
        assert!(matches!(
            scale.pixel_to_value(8),
            Err(AxisError::OutOfBounds { .. })
        ));
        assert!(matches!(
            scale.pixel_to_value(-1),
            Err(AxisError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_y_pixel_to_value_with_negative_min() {
        let scale = YScale::new(-10.0, -2.0, 3, NON_ZERO_DECIMALS).expect("valid scale");
        // Bottom and top rows map to the rounded bounds.
        assert_eq!(scale.pixel_to_value(11), Ok(-10.0));
        assert_eq!(scale.pixel_to_value(0), Ok(0.0));
        let v = scale.pixel_to_value(3).expect("in bounds");
        assert!((v - (8.0 * 0.91 - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_y_value_to_pixel() {
        let scale = YScale::new(0.0, 5.0, 2, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.value_to_pixel(0.0), Ok(7));
        assert_eq!(scale.value_to_pixel(2.88), Ok(3));
        assert_eq!(scale.value_to_pixel(5.0), Ok(0));
        assert!(matches!(
            scale.value_to_pixel(100.0),
            Err(AxisError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_y_value_to_pixel_flat_scale() {
        let scale = YScale::new(0.0, 0.0, 3, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.step.rounded(), 0.0);
        assert_eq!(scale.value_to_pixel(0.0), Ok(0));
        assert_eq!(scale.value_to_pixel(42.0), Ok(0));
    }

    #[test]
    fn test_y_cell_label() {
        let scale = YScale::new(0.0, 5.0, 9, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.cell_label(8), Ok(Value::new(0.0, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(4), Ok(Value::new(2.4, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(0), Ok(Value::new(4.8, NON_ZERO_DECIMALS)));
        assert!(matches!(scale.cell_label(9), Err(AxisError::OutOfBounds { .. })));
    }

    #[test]
    fn test_x_scale_rejects_invalid_input() {
        assert!(matches!(
            XScale::new(-1, 10, NON_ZERO_DECIMALS),
            Err(AxisError::InvalidRange(_))
        ));
        assert!(matches!(
            XScale::new(10, 0, NON_ZERO_DECIMALS),
            Err(AxisError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_x_scale_domain() {
        let empty = XScale::new(0, 5, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(empty.max.raw(), 0.0);
        assert_eq!(empty.step.rounded(), 0.0);

        let single = XScale::new(1, 5, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(single.max.raw(), 0.0);

        let scale = XScale::new(4, 100, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.min.raw(), 0.0);
        assert_eq!(scale.max.raw(), 3.0);
        assert_eq!(scale.step.rounded(), 0.016);
        assert_eq!(scale.pixel_width(), 200);
    }

    #[test]
    fn test_x_pixel_to_value() {
        let scale = XScale::new(4, 100, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.pixel_to_value(0), Ok(0.0));
        assert_eq!(scale.pixel_to_value(199), Ok(3.0));
        let v = scale.pixel_to_value(62).expect("in bounds");
        assert!((v - 0.992).abs() < 1e-9);
        assert!(matches!(
            scale.pixel_to_value(200),
            Err(AxisError::OutOfBounds { .. })
        ));
        assert!(matches!(
            scale.pixel_to_value(-1),
            Err(AxisError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_x_value_to_pixel_and_cell() {
        let scale = XScale::new(4, 100, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.value_to_pixel(0), Ok(0));
        assert_eq!(scale.value_to_pixel(1), Ok(63));
        assert_eq!(scale.value_to_pixel(3), Ok(188));
        assert_eq!(scale.value_to_cell(1), Ok(31));
        assert_eq!(scale.value_to_cell(2), Ok(62));
        assert_eq!(scale.value_to_cell(3), Ok(94));
        assert!(matches!(
            scale.value_to_pixel(4),
            Err(AxisError::OutOfBounds { .. })
        ));
        assert!(matches!(
            scale.value_to_cell(-1),
            Err(AxisError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_x_value_to_pixel_single_point() {
        let scale = XScale::new(1, 10, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.value_to_pixel(0), Ok(0));
    }

    #[test]
    fn test_x_cell_label_is_integral() {
        let scale = XScale::new(4, 100, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.cell_label(31), Ok(Value::new(1.0, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(62), Ok(Value::new(2.0, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(94), Ok(Value::new(3.0, NON_ZERO_DECIMALS)));
        assert!(matches!(scale.cell_label(100), Err(AxisError::OutOfBounds { .. })));
    }

    #[test]
    fn test_x_cell_label_is_capped_at_last_index() {
        // 14 / 125 rounds up to a step of 0.12, which reaches 15 at pixel 122.
        let scale = XScale::new(15, 63, NON_ZERO_DECIMALS).expect("valid scale");
        assert_eq!(scale.step.rounded(), 0.12);
        assert_eq!(scale.cell_label(60), Ok(Value::new(14.0, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(61), Ok(Value::new(14.0, NON_ZERO_DECIMALS)));
        assert_eq!(scale.cell_label(62), Ok(Value::new(14.0, NON_ZERO_DECIMALS)));
    }

    #[test]
    fn test_scales_reject_sizes_without_pixel_room() {
        let err = YScale::new(0.0, 1.0, i32::MAX, NON_ZERO_DECIMALS).unwrap_err();
        assert!(matches!(err, AxisError::InvalidSize { what: "graph height", .. }));

        let err = XScale::new(10, i32::MAX, NON_ZERO_DECIMALS).unwrap_err();
        assert!(matches!(err, AxisError::InvalidSize { what: "graph width", .. }));
    }

    #[test]
    fn test_position_conversion() {
        assert_eq!(position_to_y(0, 3), Ok(2));
        assert_eq!(position_to_y(2, 3), Ok(0));
        assert_eq!(y_to_position(0, 3), Ok(2));
        assert!(position_to_y(3, 3).is_err());
        assert!(y_to_position(-1, 3).is_err());
    }

    proptest! {
        #[test]
        fn prop_y_interior_pixels_roundtrip(
            min in -1000.0f64..1000.0,
            span in 0.0f64..2000.0,
            graph_height in 1i32..60,
        ) {
            let scale = YScale::new(min, min + span, graph_height, NON_ZERO_DECIMALS)
                .expect("valid scale");
            prop_assume!(scale.step.rounded() > 0.0);
            for y in 1..scale.pixel_height() - 1 {
                let v = scale.pixel_to_value(y).expect("in bounds");
                prop_assert_eq!(scale.value_to_pixel(v), Ok(y));
            }
        }

        #[test]
        fn prop_y_boundaries_map_to_rounded_bounds(
            min in -1000.0f64..1000.0,
            span in 0.0f64..2000.0,
            graph_height in 1i32..60,
        ) {
            let scale = YScale::new(min, min + span, graph_height, NON_ZERO_DECIMALS)
                .expect("valid scale");
            prop_assert!(scale.max.raw() >= scale.min.raw());
            prop_assert!(scale.step.rounded() >= 0.0);
            prop_assert!(scale.min.raw() <= 0.0 && scale.max.raw() >= 0.0);
            let bottom = scale.pixel_height() - 1;
            prop_assert_eq!(scale.pixel_to_value(bottom), Ok(scale.min.rounded()));
            prop_assert_eq!(scale.pixel_to_value(0), Ok(scale.max.rounded()));
        }
    }
}
