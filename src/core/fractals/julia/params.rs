use thiserror::Error;

use crate::core::data::complex::Complex;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.8, 0.2);

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum JuliaError {
    #[error("julia constant must be finite: {cx} + {cy}i")]
    NonFiniteConstant { cx: f64, cy: f64 },
}

/// The constant `c` added on every step, shared by all pixels of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    c: Complex,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c: DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl JuliaParams {
    pub fn new(cx: f64, cy: f64) -> Result<Self, JuliaError> {
        let c = Complex::new(cx, cy);

        if !c.is_finite() {
            return Err(JuliaError::NonFiniteConstant { cx, cy });
        }

        Ok(Self { c })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}
