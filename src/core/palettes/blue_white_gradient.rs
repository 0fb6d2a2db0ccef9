use crate::core::actions::build_palette::ports::palette_function::{
    PaletteFunction, PaletteFunctionError,
};
use crate::core::data::colour::Colour;
use crate::core::palettes::errors::GradientError;

/// Polynomial blue-to-white ramp that fades back to black at both ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlueWhiteGradient;

impl PaletteFunction for BlueWhiteGradient {
    fn colour(&self, iteration: u32, max_iterations: u32) -> Result<Colour, PaletteFunctionError> {
        if iteration > max_iterations {
            return Err(Box::new(GradientError::IterationsExceedMax {
                iterations: iteration,
                max_iterations,
            }));
        }

        if iteration == max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iteration) / f64::from(max_iterations);
        let u = 1.0 - t;

        Ok(Colour {
            r: (9.0 * u * t * t * t * 255.0) as u8,
            g: (15.0 * u * u * t * t * 255.0) as u8,
            b: (8.5 * u * u * u * t * 255.0) as u8,
        })
    }
}
