//! Escape-time evaluation: viewport mapping, the fractal variants, palette
//! tables and the raster generator.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod palettes;
pub mod util;
