use crate::core::data::colour::Colour;

/// Colour of any iteration count past the end of the table.
pub const IN_SET_COLOUR: Colour = Colour::BLACK;

/// Colours indexed by iteration count, `0..=max_iterations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    colours: Vec<Colour>,
}

impl PaletteTable {
    pub(crate) fn from_colours(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.colours.len().saturating_sub(1) as u32
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn lookup(&self, iteration: u32) -> Colour {
        self.colours
            .get(iteration as usize)
            .copied()
            .unwrap_or(IN_SET_COLOUR)
    }
}
