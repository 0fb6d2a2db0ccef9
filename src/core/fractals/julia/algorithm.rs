use crate::core::actions::generate_raster::ports::escape_time::{
    EscapeTimeAlgorithm, iterate_quadratic,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::julia::params::JuliaParams;

/// `z ← z² + c` starting from the pixel, with `c` fixed for the whole frame.
/// There is no closed-form interior test, so every pixel runs the full loop.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Julia {
    params: JuliaParams,
}

impl Julia {
    #[must_use]
    pub fn new(params: JuliaParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> JuliaParams {
        self.params
    }
}

impl EscapeTimeAlgorithm for Julia {
    fn iterate(&self, point: Complex, max_iterations: u32) -> u32 {
        iterate_quadratic(point, self.params.c(), max_iterations)
    }
}
