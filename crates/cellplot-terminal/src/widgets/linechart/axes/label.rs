//! Placement of the labels next to the axes.

use super::scale::{XScale, YScale};
use super::value::Value;
use crate::error::AxisError;
use cellplot_core::{align, Horizontal, Point, Rect, Vertical};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use unicode_width::UnicodeWidthStr;

/// Y labels are attempted on every n-th row, starting at the bottom.
pub const Y_LABEL_SPACING: i32 = 4;

/// Minimum graph height in cells that can carry Y labels.
pub const MIN_Y_LABEL_HEIGHT: i32 = 2;

/// Minimum distance in cells between the starts of two X labels.
pub const X_MIN_SPACING: i32 = 3;

/// What a label shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    /// A value computed from the scale.
    Number(Value),
    /// Text supplied by the caller in place of the value.
    Text(String),
}

impl LabelValue {
    /// The text to draw.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(v) => Cow::Owned(v.text()),
            Self::Text(t) => Cow::Borrowed(t),
        }
    }

    /// Width of the text in terminal columns.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.text().width() as i32
    }
}

impl From<Value> for LabelValue {
    fn from(v: Value) -> Self {
        Self::Number(v)
    }
}

/// A label and the cell where its text starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// The label content.
    pub value: LabelValue,
    /// Cell of the first character of the label.
    pub position: Point,
}

/// Width of the widest label, zero when there are none.
#[must_use]
pub fn longest_label(labels: &[Label]) -> i32 {
    labels.iter().map(|l| l.value.width()).max().unwrap_or(0)
}

/// Returns the labels for the Y axis, bottom label first.
///
/// `label_width` is the width of the area left of the Y axis. Labels are
/// right-aligned within it; text wider than the area starts at column zero
/// and is expected to be trimmed by the caller.
///
/// Rows whose label text repeats an already placed label are skipped. If
/// the scale carries data but fewer than two labels were placed, the top
/// row is labelled as well, so a flat series still shows a readable axis.
pub fn y_labels(scale: &YScale, label_width: i32) -> Result<Vec<Label>, AxisError> {
    if scale.graph_height < MIN_Y_LABEL_HEIGHT {
        return Err(AxisError::InvalidSize {
            what: "graph height",
            min: MIN_Y_LABEL_HEIGHT,
            got: scale.graph_height,
        });
    }
    if label_width < 1 {
        return Err(AxisError::InvalidSize {
            what: "label width",
            min: 1,
            got: label_width,
        });
    }

    let mut labels = Vec::new();
    let mut seen = HashSet::new();
    for y in (0..scale.graph_height).rev().step_by(Y_LABEL_SPACING as usize) {
        let label = row_label(scale, y, label_width)?;
        if seen.insert(label.value.text().into_owned()) {
            labels.push(label);
        } else {
            tracing::trace!(row = y, "skipping repeated y label");
        }
    }

    let have_data = scale.min.rounded() != 0.0 || scale.max.rounded() != 0.0;
    if labels.len() < 2 && have_data {
        let top = row_label(scale, 0, label_width)?;
        if seen.insert(top.value.text().into_owned()) {
            labels.push(top);
        }
    }
    Ok(labels)
}

/// Label for the cell row `y`, right-aligned in the label area.
fn row_label(scale: &YScale, y: i32, label_width: i32) -> Result<Label, AxisError> {
    let value = scale.cell_label(y)?;
    let area = Rect::new(0, y, label_width, y + 1);
    let position = align::text(area, &value.text(), Horizontal::Right, Vertical::Middle)?;
    Ok(Label {
        value: value.into(),
        position,
    })
}

/// Free columns under the X axis, consumed left to right.
#[derive(Debug)]
struct XSpace {
    /// Next free column relative to the graph zero.
    cur: i32,
    /// Columns `0 <= x < max` belong to the graph.
    max: i32,
    graph_zero: Point,
}

impl XSpace {
    const fn new(graph_zero: Point, graph_width: i32) -> Self {
        Self {
            cur: 0,
            max: graph_width,
            graph_zero,
        }
    }

    const fn remaining(&self) -> i32 {
        self.max - self.cur
    }

    /// Absolute cell of a label starting at the current column. The row
    /// below the graph holds the axis, the labels go one row further down.
    fn label_position(&self) -> Point {
        self.graph_zero + Point::new(self.cur, 2)
    }

    fn advance(&mut self, size: i32) {
        self.cur = (self.cur + size).min(self.max);
    }
}

/// Returns the labels for the X axis in increasing index order.
///
/// `graph_zero` is the cell of data index zero. Labels are placed greedily
/// from the left: each label is followed by a jump to the cell of the next
/// index, but at least [`X_MIN_SPACING`] cells. A label that does not fit
/// in the remaining width ends the placement, so the result may be empty
/// when even the first label is too wide.
///
/// `custom_labels` replaces the text of the label for a data index; the
/// position is still computed from the scale.
pub fn x_labels(
    scale: &XScale,
    graph_zero: Point,
    custom_labels: &BTreeMap<i32, String>,
) -> Result<Vec<Label>, AxisError> {
    let mut space = XSpace::new(graph_zero, scale.graph_width);
    let mut labels = Vec::new();

    while let Some((label, index)) = col_label(scale, &mut space, custom_labels)? {
        labels.push(label);

        let next = index + 1;
        if f64::from(next) > scale.max.raw() {
            break;
        }

        let skip = (scale.value_to_cell(next)? - space.cur).max(X_MIN_SPACING);
        if space.remaining() <= skip {
            tracing::trace!(next, skip, remaining = space.remaining(), "no room for next x label");
            break;
        }
        space.advance(skip);
    }
    Ok(labels)
}

/// Places a label at the current column of the space and consumes its
/// width. Returns the label with its data index, or `None` if it does not
/// fit.
fn col_label(
    scale: &XScale,
    space: &mut XSpace,
    custom_labels: &BTreeMap<i32, String>,
) -> Result<Option<(Label, i32)>, AxisError> {
    let value = scale.cell_label(space.cur)?;
    let index = value.rounded() as i32;
    let value = match custom_labels.get(&index) {
        Some(text) => LabelValue::Text(text.clone()),
        None => LabelValue::Number(value),
    };

    let width = value.width();
    if width > space.remaining() {
        tracing::trace!(index, width, remaining = space.remaining(), "x label does not fit");
        return Ok(None);
    }

    let position = space.label_position();
    space.advance(width);
    Ok(Some((Label { value, position }, index)))
}
