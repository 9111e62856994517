//! Core primitives for Cellplot terminal charts.
//!
//! This crate provides the building blocks that do not depend on any
//! terminal backend:
//! - Numerical helpers: [`numbers`] (significant-decimal rounding, min/max,
//!   angle conversion)
//! - Cell geometry: [`Point`], [`Rect`]
//! - Text alignment within a cell area: [`align`]

pub mod align;
mod geometry;
pub mod numbers;

pub use align::{AlignError, Horizontal, Vertical};
pub use geometry::{Point, Rect};
