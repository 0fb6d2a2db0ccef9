use crate::core::actions::build_palette::ports::palette_function::{
    PaletteFunction, PaletteFunctionError,
};
use crate::core::data::colour::Colour;
use crate::core::palettes::errors::GradientError;

/// Black through red, orange and yellow to white. The in-set value is black.
#[derive(Debug, Default, Clone, Copy)]
pub struct FireGradient;

impl PaletteFunction for FireGradient {
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

        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }
}
