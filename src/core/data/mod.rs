pub mod colour;
pub mod complex;
pub mod palette_table;
pub mod point;
pub mod raster;
pub mod viewport;
