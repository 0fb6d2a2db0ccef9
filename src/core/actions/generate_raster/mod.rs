pub mod generate_raster;
pub mod generate_raster_rayon;
pub mod generation_stats;
pub mod ports;
