use std::time::Instant;

use crate::core::actions::generate_raster::generation_stats::GenerationStats;
use crate::core::actions::generate_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::palette_table::PaletteTable;
use crate::core::data::raster::{Raster, RasterPixel};
use crate::core::data::viewport::ViewportState;
use crate::core::util::map_pixel::map_pixel;

/// Immutable snapshot of everything one generation pass reads.
#[derive(Debug)]
pub struct RasterRequest<'a, A> {
    pub algorithm: &'a A,
    pub viewport: ViewportState,
    pub max_iterations: u32,
    pub palette: &'a PaletteTable,
    pub width: u32,
    pub height: u32,
}

impl<A> Clone for RasterRequest<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for RasterRequest<'_, A> {}

/// Evaluates and colours one raster row in place, returning the sum of its
/// escape values.
pub(crate) fn render_row<A: EscapeTimeAlgorithm>(
    request: &RasterRequest<'_, A>,
    row: &mut [RasterPixel],
) -> u64 {
    let mut iterations = 0;

    for pixel in row.iter_mut() {
        let point = map_pixel(pixel.position, request.width, request.height, &request.viewport);
        let value = request.algorithm.escape_time(point, request.max_iterations);

        pixel.colour = request.palette.lookup(value);
        iterations += u64::from(value);
    }

    iterations
}

/// Single-threaded reference generator. Produces the same raster as
/// [`generate_raster`](super::generate_raster_rayon::generate_raster).
pub fn generate_raster_serial<A: EscapeTimeAlgorithm>(
    request: &RasterRequest<'_, A>,
) -> (Raster, GenerationStats) {
    let start = Instant::now();
    let mut raster = Raster::new(request.width, request.height);
    let width = request.width as usize;

    let total_iterations = if width == 0 {
        0
    } else {
        raster
            .pixels_mut()
            .chunks_mut(width)
            .map(|row| render_row(request, row))
            .sum::<u64>()
    };

    let stats = GenerationStats {
        elapsed: start.elapsed(),
        pixel_count: raster.len() as u64,
        total_iterations,
    };

    (raster, stats)
}
