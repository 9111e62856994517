//! Canvas resolution contract consumed by the chart axes.

pub mod braille;
