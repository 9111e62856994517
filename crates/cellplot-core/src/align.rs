//! Alignment of single-line text inside a cell rectangle.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizontal {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered, extra cell goes right.
    Center,
    /// Flush with the right edge.
    Right,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    /// Flush with the top edge.
    #[default]
    Top,
    /// Centered, extra row goes down.
    Middle,
    /// Flush with the bottom edge.
    Bottom,
}

/// Errors from text alignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Only single-line text can be aligned.
    #[error("cannot align text {0:?}, it spans multiple lines")]
    MultiLine(String),
}

/// Returns the point where `text` should start so that it is aligned within
/// `area`.
///
/// Text wider than the area is treated as if it was trimmed to the area
/// width, so it starts at the left edge regardless of `h`.
pub fn text(area: Rect, text: &str, h: Horizontal, v: Vertical) -> Result<Point, AlignError> {
    if text.contains('\n') {
        return Err(AlignError::MultiLine(text.to_string()));
    }

    let width = (text.width() as i32).min(area.width());
    let height = 1.min(area.height());
    Ok(Point::new(
        align_horizontal(area, width, h),
        align_vertical(area, height, v),
    ))
}

fn align_horizontal(area: Rect, width: i32, h: Horizontal) -> i32 {
    match h {
        Horizontal::Left => area.min.x,
        Horizontal::Center => area.min.x + (area.width() - width) / 2,
        Horizontal::Right => area.max.x - width,
    }
}

fn align_vertical(area: Rect, height: i32, v: Vertical) -> i32 {
    match v {
        Vertical::Top => area.min.y,
        Vertical::Middle => area.min.y + (area.height() - height) / 2,
        Vertical::Bottom => area.max.y - height,
    }
}
