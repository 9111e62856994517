//! Line chart drawn on a braille canvas.

pub mod axes;
