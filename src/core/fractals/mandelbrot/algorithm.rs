use crate::core::actions::generate_raster::ports::escape_time::{
    EscapeTimeAlgorithm, iterate_quadratic,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::params::{BulbCheck, MandelbrotParams};

/// `z ← z² + c` starting from the origin, with the pixel as `c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Mandelbrot {
    params: MandelbrotParams,
}

impl Mandelbrot {
    #[must_use]
    pub fn new(params: MandelbrotParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> MandelbrotParams {
        self.params
    }
}

impl EscapeTimeAlgorithm for Mandelbrot {
    fn iterate(&self, point: Complex, max_iterations: u32) -> u32 {
        iterate_quadratic(Complex::ZERO, point, max_iterations)
    }

    fn is_known_bounded(&self, point: Complex) -> bool {
        point_in_cardioid_or_bulb(point.real, point.imag, self.params.bulb_check)
    }
}

/// Membership test for the main cardioid and the period-2 bulb, both of
/// which lie entirely inside the set.
#[must_use]
pub fn point_in_cardioid_or_bulb(x: f64, y: f64, bulb_check: BulbCheck) -> bool {
    let p = ((x - 0.25) * (x - 0.25) + y * y).sqrt();
    if x <= p - 2.0 * (p * p) + 0.25 {
        return true;
    }

    (x + 1.0) * (x + 1.0) + y * y <= bulb_check.radius_squared()
}
