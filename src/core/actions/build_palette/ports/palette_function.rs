use std::error::Error;

use crate::core::data::colour::Colour;

pub type PaletteFunctionError = Box<dyn Error + Send + Sync>;

/// Host-supplied colouring rule, consulted once per table entry and never
/// per pixel.
pub trait PaletteFunction: Send + Sync {
    fn colour(&self, iteration: u32, max_iterations: u32) -> Result<Colour, PaletteFunctionError>;
}

impl<F> PaletteFunction for F
where
    F: Fn(u32, u32) -> Result<Colour, PaletteFunctionError> + Send + Sync,
{
    fn colour(&self, iteration: u32, max_iterations: u32) -> Result<Colour, PaletteFunctionError> {
        self(iteration, max_iterations)
    }
}

/// Pins a closure to the palette signature so its argument types are inferred.
pub fn palette_fn<F>(f: F) -> F
where
    F: Fn(u32, u32) -> Result<Colour, PaletteFunctionError> + Send + Sync,
{
    f
}

/// Wraps a palette closure that cannot fail.
pub fn infallible_palette_fn<F>(f: F) -> impl PaletteFunction
where
    F: Fn(u32, u32) -> Colour + Send + Sync,
{
    palette_fn(move |iteration, max_iterations| Ok(f(iteration, max_iterations)))
}
