use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterPixel {
    pub position: Point,
    pub colour: Colour,
}

/// Row-major pixel records for one generated frame, indexed by
/// `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<RasterPixel>,
}

impl Raster {
    /// Builds a black raster with every record's position filled in.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = (0..height as i32)
            .flat_map(|y| {
                (0..width as i32).map(move |x| RasterPixel {
                    position: Point { x, y },
                    colour: Colour::BLACK,
                })
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> &[RasterPixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [RasterPixel] {
        &mut self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&RasterPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels.get((x + y * self.width) as usize)
    }

    #[must_use]
    pub fn colours(&self) -> Vec<Colour> {
        self.pixels.iter().map(|pixel| pixel.colour).collect()
    }

    /// Packed RGB bytes in raster order, three per pixel.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);

        for RasterPixel { colour, .. } in &self.pixels {
            bytes.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        bytes
    }
}
