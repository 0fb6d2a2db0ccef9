use crate::core::actions::build_palette::ports::palette_function::PaletteFunction;
use crate::core::palettes::blue_white_gradient::BlueWhiteGradient;
use crate::core::palettes::fire_gradient::FireGradient;
use crate::core::palettes::kinds::PaletteKinds;

#[must_use]
pub fn palette_factory(kind: PaletteKinds) -> Box<dyn PaletteFunction> {
    match kind {
        PaletteKinds::FireGradient => Box::new(FireGradient),
        PaletteKinds::BlueWhiteGradient => Box::new(BlueWhiteGradient),
    }
}
