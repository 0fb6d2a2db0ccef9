use rayon::prelude::*;
use std::time::Instant;

use crate::core::actions::generate_raster::generate_raster::{RasterRequest, render_row};
use crate::core::actions::generate_raster::generation_stats::GenerationStats;
use crate::core::actions::generate_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::raster::Raster;

/// Generates a full raster in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Each worker owns a disjoint `&mut` row slice of
/// the output and only reads the shared request, so no synchronisation is
/// needed. The palette table must be built before calling this.
pub fn generate_raster<A>(request: &RasterRequest<'_, A>) -> (Raster, GenerationStats)
where
    A: EscapeTimeAlgorithm + Sync,
{
    let start = Instant::now();
    let mut raster = Raster::new(request.width, request.height);
    let width = request.width as usize;

    let total_iterations = if width == 0 {
        0
    } else {
        raster
            .pixels_mut()
            .par_chunks_mut(width)
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
