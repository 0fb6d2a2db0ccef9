pub mod build_palette;
pub mod generate_raster;
