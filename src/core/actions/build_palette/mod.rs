pub mod build_palette;
pub mod ports;
