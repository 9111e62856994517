//! Sub-cell resolution of the braille canvas.
//!
//! A braille character is a 2x4 grid of dots, so every terminal cell holds
//! `COL_MULT` pixel columns and `ROW_MULT` pixel rows. Scales address these
//! pixels and convert back to whole cells with the same multipliers.

/// Pixel rows per cell.
pub const ROW_MULT: i32 = 4;

/// Pixel columns per cell.
pub const COL_MULT: i32 = 2;
