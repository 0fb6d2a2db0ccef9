use log::{debug, info, warn};
use thiserror::Error;

use crate::core::actions::build_palette::build_palette::{BuildPaletteError, build_palette};
use crate::core::actions::build_palette::ports::palette_function::PaletteFunction;
use crate::core::actions::generate_raster::generate_raster::RasterRequest;
use crate::core::actions::generate_raster::generate_raster_rayon::generate_raster;
use crate::core::actions::generate_raster::generation_stats::GenerationStats;
use crate::core::data::palette_table::PaletteTable;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::{ViewportError, ViewportState};
use crate::core::fractals::fractal::Fractal;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("image size must be positive: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Palette(#[from] BuildPaletteError),
}

/// Owns the state of one fractal view and regenerates its raster on request.
///
/// Setters never regenerate on their own; call [`FractalEngine::generate`]
/// after mutating. The palette table is rebuilt eagerly whenever the palette
/// function or the iteration budget changes.
pub struct FractalEngine {
    fractal: Fractal,
    viewport: ViewportState,
    max_iterations: u32,
    width: u32,
    height: u32,
    palette_fn: Box<dyn PaletteFunction>,
    palette: PaletteTable,
    raster: Raster,
    latest_generation: GenerationStats,
}

impl std::fmt::Debug for FractalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FractalEngine")
            .field("fractal", &self.fractal)
            .field("viewport", &self.viewport)
            .field("max_iterations", &self.max_iterations)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("latest_generation", &self.latest_generation)
            .finish_non_exhaustive()
    }
}

impl FractalEngine {
    /// Builds the engine at the default viewport and runs the first
    /// generation pass.
    pub fn new(
        fractal: Fractal,
        max_iterations: u32,
        width: u32,
        height: u32,
        palette_fn: Box<dyn PaletteFunction>,
    ) -> Result<Self, EngineError> {
        Self::with_viewport(
            fractal,
            ViewportState::default(),
            max_iterations,
            width,
            height,
            palette_fn,
        )
    }

    pub fn with_viewport(
        fractal: Fractal,
        viewport: ViewportState,
        max_iterations: u32,
        width: u32,
        height: u32,
        palette_fn: Box<dyn PaletteFunction>,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }

        let palette = build_palette(palette_fn.as_ref(), max_iterations)?;

        let mut engine = Self {
            fractal,
            viewport,
            max_iterations,
            width,
            height,
            palette_fn,
            palette,
            raster: Raster::new(0, 0),
            latest_generation: GenerationStats::default(),
        };
        engine.generate();

        Ok(engine)
    }

    #[must_use]
    pub fn fractal(&self) -> Fractal {
        self.fractal
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
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
    pub fn palette(&self) -> &PaletteTable {
        &self.palette
    }

    /// The raster produced by the most recent generation pass.
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn latest_generation(&self) -> GenerationStats {
        self.latest_generation
    }

    /// Replaces the viewport. An invalid zoom or offset leaves the current
    /// viewport in place.
    pub fn set_viewport(&mut self, zoom: f64, x_offset: f64, y_offset: f64) -> Result<(), ViewportError> {
        self.viewport = ViewportState::new(zoom, x_offset, y_offset)?;
        Ok(())
    }

    pub fn set_viewport_state(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    pub fn reset_view(&mut self) {
        self.viewport = ViewportState::default();
    }

    /// Changes the iteration budget and rebuilds the palette table. If the
    /// budget exceeds
    /// [`MAX_ITERATIONS_LIMIT`](crate::core::actions::build_palette::build_palette::MAX_ITERATIONS_LIMIT)
    /// or the palette function fails, the previous budget and table are kept.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), BuildPaletteError> {
        let palette = build_palette(self.palette_fn.as_ref(), max_iterations)?;

        info!("palette rebuilt for {} iterations", max_iterations);
        self.max_iterations = max_iterations;
        self.palette = palette;
        Ok(())
    }

    /// Installs a new palette function. If it fails while building the
    /// table, the previous function and table are kept.
    pub fn set_palette_function(&mut self, palette_fn: Box<dyn PaletteFunction>) -> Result<(), BuildPaletteError> {
        let palette = build_palette(palette_fn.as_ref(), self.max_iterations)?;

        info!("palette function replaced");
        self.palette_fn = palette_fn;
        self.palette = palette;
        Ok(())
    }

    /// Switches variant or parameters. Takes effect on the next generation.
    pub fn set_fractal_parameters(&mut self, fractal: Fractal) {
        self.fractal = fractal;
    }

    /// Resizes the output. A zero dimension is ignored and the previous size
    /// and raster are kept.
    pub fn set_image_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!("ignoring invalid image size {}x{}", width, height);
            return;
        }

        self.width = width;
        self.height = height;
    }

    /// Recomputes the whole raster from the current state.
    pub fn generate(&mut self) -> GenerationStats {
        let (raster, stats) = self.render(self.max_iterations, &self.palette);

        self.raster = raster;
        self.latest_generation = stats;
        stats
    }

    /// Renders once with a temporary budget. The committed budget and palette
    /// table stay as they were, so the next [`generate`](Self::generate)
    /// renders with them again.
    pub fn preview_with_max_iterations(&mut self, max_iterations: u32) -> Result<GenerationStats, BuildPaletteError> {
        let palette = build_palette(self.palette_fn.as_ref(), max_iterations)?;
        let (raster, stats) = self.render(max_iterations, &palette);

        self.raster = raster;
        self.latest_generation = stats;
        Ok(stats)
    }

    fn render(&self, max_iterations: u32, palette: &PaletteTable) -> (Raster, GenerationStats) {
        let request = RasterRequest {
            algorithm: &self.fractal,
            viewport: self.viewport,
            max_iterations,
            palette,
            width: self.width,
            height: self.height,
        };

        let (raster, stats) = generate_raster(&request);

        debug!(
            "{} {}x{} at {} iterations generated in {} ms",
            self.fractal.display_name(),
            self.width,
            self.height,
            max_iterations,
            stats.elapsed_millis()
        );

        (raster, stats)
    }
}
