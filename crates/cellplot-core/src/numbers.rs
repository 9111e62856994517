//! Numerical helpers shared by the chart widgets.
//!
//! Everything here is a pure function over `f64`/`i32` inputs.

use std::f64::consts::PI;

/// Significant decimal digits an `f64` can carry. Requests for more
/// precision than this leave values unrounded.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 17;

/// Rounds `value` up so that it keeps at least `places` non-zero decimal
/// places, counted from the first non-zero digit after the decimal point.
///
/// Returns the rounded value and the number of leading zero decimal places
/// in the fractional part of `value`. A `places` of zero returns `value`
/// unchanged (only the zero count is computed), and so does a precision that
/// together with the integer digits exceeds [`MAX_SIGNIFICANT_DIGITS`].
/// Negative `places` behave as their absolute value.
///
/// Rounding is always towards positive infinity, so an axis step computed
/// through this function is never smaller than the exact step.
///
/// ```
/// use cellplot_core::numbers::round_to_non_zero_places;
///
/// assert_eq!(round_to_non_zero_places(0.000_123_45, 2), (0.000_13, 3));
/// assert_eq!(round_to_non_zero_places(1.234_567, 2), (1.24, 0));
/// assert_eq!(round_to_non_zero_places(-1.234_567, 2), (-1.23, 0));
/// ```
#[must_use]
pub fn round_to_non_zero_places(value: f64, places: i32) -> (f64, i32) {
    if value == 0.0 {
        return (0.0, 0);
    }

    let fraction = value.fract();
    if fraction == 0.0 {
        return (value, 0);
    }

    let zeros = leading_zero_places(fraction);
    let places = places.unsigned_abs();
    if places == 0 || integer_digits(value) + places > MAX_SIGNIFICANT_DIGITS {
        return (value, zeros);
    }

    let mult = 10f64.powi(zeros + places as i32);
    let scaled = value * mult;
    if !scaled.is_finite() {
        return (value, zeros);
    }
    (scaled.ceil() / mult, zeros)
}

/// Number of digits before the decimal point, zero for values below one.
fn integer_digits(value: f64) -> u32 {
    let int = value.abs().trunc();
    if int < 1.0 {
        0
    } else {
        int.log10().floor() as u32 + 1
    }
}

/// Number of zero decimal places before the first non-zero digit of a
/// fraction. The fraction must not be zero.
fn leading_zero_places(fraction: f64) -> i32 {
    let mut v = fraction.abs();
    let mut zeros = 0;
    while v < 0.1 {
        v *= 10.0;
        zeros += 1;
    }
    zeros
}

/// Returns the nearest integer, rounding half away from zero.
///
/// `-0.0`, `NaN` and the infinities are returned unchanged.
#[must_use]
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Returns the smallest and the largest of the values, `(0.0, 0.0)` when
/// there are none.
#[must_use]
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let Some((&first, rest)) = values.split_first() else {
        return (0.0, 0.0);
    };
    rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    })
}

/// Integer variant of [`min_max`].
#[must_use]
pub fn min_max_ints(values: &[i32]) -> (i32, i32) {
    match (values.iter().min(), values.iter().max()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0, 0),
    }
}

/// Converts degrees to radians. Angles above a full turn wrap around, so
/// 361 degrees is the same as 1 degree.
#[must_use]
pub fn degrees_to_radians(degrees: i32) -> f64 {
    let degrees = if degrees > 360 { degrees % 360 } else { degrees };
    f64::from(degrees) / 180.0 * PI
}

/// Converts radians to whole degrees, rounding half away from zero.
/// Negative angles are normalized into `[0, 360)`.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> i32 {
    let degrees = round(radians * 180.0 / PI) as i32;
    if degrees < 0 {
        degrees.rem_euclid(360)
    } else {
        degrees
    }
}
