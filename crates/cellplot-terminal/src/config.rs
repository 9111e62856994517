//! Configuration of the line chart axes.

use crate::widgets::linechart::axes::NON_ZERO_DECIMALS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options that influence how the axes are scaled and labelled.
///
/// Every field has a default, so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Significant decimal places shown on axis labels.
    #[serde(default = "default_non_zero_decimals")]
    pub non_zero_decimals: i32,
    /// Text shown instead of the index for individual X positions.
    #[serde(default)]
    pub custom_x_labels: BTreeMap<i32, String>,
}

const fn default_non_zero_decimals() -> i32 {
    NON_ZERO_DECIMALS
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            non_zero_decimals: NON_ZERO_DECIMALS,
            custom_x_labels: BTreeMap::new(),
        }
    }
}

impl AxesConfig {
    /// Sets the number of significant decimal places.
    #[must_use]
    pub const fn with_non_zero_decimals(mut self, places: i32) -> Self {
        self.non_zero_decimals = places;
        self
    }

    /// Replaces the label of the data point at `index`.
    #[must_use]
    pub fn with_custom_x_label(mut self, index: i32, text: impl Into<String>) -> Self {
        self.custom_x_labels.insert(index, text.into());
        self
    }
}
