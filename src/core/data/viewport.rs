use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ZOOM: f64 = 0.003;
pub const DEFAULT_X_OFFSET: f64 = -0.7;
pub const DEFAULT_Y_OFFSET: f64 = 0.0;

/// Multiplier applied to `zoom` by a single zoom-in step.
pub const ZOOM_STEP: f64 = 0.8;
/// Distance, in pixels, moved by a single pan step.
pub const PAN_STEP_PIXELS: f64 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be positive and finite: {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("viewport offsets must be finite: x:{x_offset}, y:{y_offset}")]
    NonFiniteOffset { x_offset: f64, y_offset: f64 },
    #[error("zoom multiplier must be positive and finite: {multiplier}")]
    InvalidZoomMultiplier { multiplier: f64 },
}

/// Complex-plane units per pixel (`zoom`) plus the point shown at the centre
/// of the raster.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct ViewportState {
    zoom: f64,
    x_offset: f64,
    y_offset: f64,
}

#[derive(Deserialize)]
struct RawViewport {
    #[serde(default = "default_zoom")]
    zoom: f64,
    #[serde(default = "default_x_offset")]
    x_offset: f64,
    #[serde(default)]
    y_offset: f64,
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

fn default_x_offset() -> f64 {
    DEFAULT_X_OFFSET
}

impl TryFrom<RawViewport> for ViewportState {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Self::new(raw.zoom, raw.x_offset, raw.y_offset)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, x_offset: f64, y_offset: f64) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !x_offset.is_finite() || !y_offset.is_finite() {
            return Err(ViewportError::NonFiniteOffset { x_offset, y_offset });
        }

        Ok(Self {
            zoom,
            x_offset,
            y_offset,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Scales `zoom` by `multiplier`. Values below 1 zoom in.
    pub fn zoom_by(&mut self, multiplier: f64) -> Result<(), ViewportError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ViewportError::InvalidZoomMultiplier { multiplier });
        }

        let zoom = self.zoom * multiplier;

        // Repeated zooming can underflow to 0 or overflow to inf.
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        self.zoom = zoom;
        Ok(())
    }

    pub fn zoom_in(&mut self) -> Result<(), ViewportError> {
        self.zoom_by(ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> Result<(), ViewportError> {
        self.zoom_by(1.0 / ZOOM_STEP)
    }

    /// Moves the centre by a distance given in pixels at the current zoom.
    /// A move that would leave either offset non-finite is rejected and the
    /// centre stays where it was.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        let x_offset = self.x_offset + dx * self.zoom;
        let y_offset = self.y_offset + dy * self.zoom;

        if !x_offset.is_finite() || !y_offset.is_finite() {
            return Err(ViewportError::NonFiniteOffset { x_offset, y_offset });
        }

        self.x_offset = x_offset;
        self.y_offset = y_offset;
        Ok(())
    }

    /// Magnification relative to the default zoom level.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        DEFAULT_ZOOM / self.zoom
    }
}
