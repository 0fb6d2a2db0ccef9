pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::engine::{EngineError, FractalEngine};
pub use crate::controllers::engine_config::{ConfigError, EngineConfig, JuliaConstantConfig};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::build_palette::build_palette::{
    BuildPaletteError, MAX_ITERATIONS_LIMIT, build_palette,
};
pub use crate::core::actions::build_palette::ports::palette_function::{
    PaletteFunction, PaletteFunctionError, infallible_palette_fn, palette_fn,
};
pub use crate::core::actions::generate_raster::generate_raster::{RasterRequest, generate_raster_serial};
pub use crate::core::actions::generate_raster::generate_raster_rayon::generate_raster;
pub use crate::core::actions::generate_raster::generation_stats::GenerationStats;
pub use crate::core::actions::generate_raster::ports::escape_time::EscapeTimeAlgorithm;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::palette_table::{IN_SET_COLOUR, PaletteTable};
pub use crate::core::data::raster::{Raster, RasterPixel};
pub use crate::core::data::viewport::{ViewportError, ViewportState};
pub use crate::core::fractals::fractal::Fractal;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::Julia;
pub use crate::core::fractals::julia::params::{JuliaError, JuliaParams};
pub use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
pub use crate::core::fractals::mandelbrot::params::{BulbCheck, MandelbrotParams};
pub use crate::core::palettes::factory::palette_factory;
pub use crate::core::palettes::kinds::PaletteKinds;
pub use crate::core::util::map_pixel::map_pixel;
pub use crate::presenters::file::ppm::PpmFilePresenter;
