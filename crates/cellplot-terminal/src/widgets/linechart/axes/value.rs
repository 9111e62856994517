//! Values displayed on the axes.

use cellplot_core::numbers::{round_to_non_zero_places, MAX_SIGNIFICANT_DIGITS};
use std::fmt;

/// Renderings longer than this switch to scientific notation.
const MAX_TEXT_LEN: usize = 10;

/// A numeric value on an axis together with its display rounding.
///
/// Built once per scale boundary or label and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    raw: f64,
    rounded: f64,
    zero_decimals: i32,
    non_zero_decimals: i32,
}

impl Value {
    /// Creates a value rounded up to `non_zero_decimals` significant decimal
    /// places. See [`round_to_non_zero_places`] for the rounding rules; a
    /// precision of zero keeps the raw value.
    #[must_use]
    pub fn new(raw: f64, non_zero_decimals: i32) -> Self {
        let (rounded, zero_decimals) = round_to_non_zero_places(raw, non_zero_decimals);
        Self {
            raw,
            rounded,
            zero_decimals,
            non_zero_decimals,
        }
    }

    /// The unrounded value.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        self.raw
    }

    /// The value rounded for display.
    #[must_use]
    pub const fn rounded(&self) -> f64 {
        self.rounded
    }

    /// Leading zero decimal places of the raw value.
    #[must_use]
    pub const fn zero_decimals(&self) -> i32 {
        self.zero_decimals
    }

    /// Precision the value was rounded with.
    #[must_use]
    pub const fn non_zero_decimals(&self) -> i32 {
        self.non_zero_decimals
    }

    /// Text of the rounded value as shown on the axis.
    ///
    /// Integral values have no decimal point. Other values show their zero
    /// decimal places followed by the non-zero ones.
    #[must_use]
    pub fn text(&self) -> String {
        if self.rounded.ceil() == self.rounded {
            return format!("{:.0}", self.rounded);
        }

        let places = self.non_zero_decimals.unsigned_abs().min(MAX_SIGNIFICANT_DIGITS);
        let decimals = (places + self.zero_decimals.unsigned_abs()) as usize;
        let text = format!("{:.*}", decimals, self.rounded);
        if text.len() > MAX_TEXT_LEN {
            format!("{:.2e}", self.rounded)
        } else {
            text
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
