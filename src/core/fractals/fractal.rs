use crate::core::actions::generate_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::Julia;
use crate::core::fractals::julia::params::JuliaParams;
use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// The active escape-time variant together with its parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Fractal {
    Mandelbrot(Mandelbrot),
    Julia(Julia),
}

impl Default for Fractal {
    fn default() -> Self {
        Self::from_kind(FractalKinds::default())
    }
}

impl From<MandelbrotParams> for Fractal {
    fn from(params: MandelbrotParams) -> Self {
        Self::Mandelbrot(Mandelbrot::new(params))
    }
}

impl From<JuliaParams> for Fractal {
    fn from(params: JuliaParams) -> Self {
        Self::Julia(Julia::new(params))
    }
}

impl Fractal {
    /// The given variant with default parameters.
    #[must_use]
    pub fn from_kind(kind: FractalKinds) -> Self {
        match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot(Mandelbrot::default()),
            FractalKinds::Julia => Self::Julia(Julia::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

impl EscapeTimeAlgorithm for Fractal {
    fn iterate(&self, point: Complex, max_iterations: u32) -> u32 {
        match self {
            Self::Mandelbrot(mandelbrot) => mandelbrot.iterate(point, max_iterations),
            Self::Julia(julia) => julia.iterate(point, max_iterations),
        }
    }

    fn is_known_bounded(&self, point: Complex) -> bool {
        match self {
            Self::Mandelbrot(mandelbrot) => mandelbrot.is_known_bounded(point),
            Self::Julia(julia) => julia.is_known_bounded(point),
        }
    }
}
