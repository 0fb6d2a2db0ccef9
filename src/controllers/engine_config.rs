use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::controllers::engine::{EngineError, FractalEngine};
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::fractal::Fractal;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::params::{DEFAULT_JULIA_CONSTANT, JuliaError, JuliaParams};
use crate::core::fractals::mandelbrot::params::{BulbCheck, MandelbrotParams};
use crate::core::palettes::factory::palette_factory;
use crate::core::palettes::kinds::PaletteKinds;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Julia(#[from] JuliaError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JuliaConstantConfig {
    pub cx: f64,
    pub cy: f64,
}

impl Default for JuliaConstantConfig {
    fn default() -> Self {
        Self {
            cx: DEFAULT_JULIA_CONSTANT.real,
            cy: DEFAULT_JULIA_CONSTANT.imag,
        }
    }
}

/// Everything needed to construct a [`FractalEngine`]. Every field is
/// optional in TOML and falls back to the defaults below.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fractal: FractalKinds,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub viewport: ViewportState,
    pub julia: JuliaConstantConfig,
    pub palette: PaletteKinds,
    pub bulb_check: BulbCheck,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            viewport: ViewportState::default(),
            julia: JuliaConstantConfig::default(),
            palette: PaletteKinds::default(),
            bulb_check: BulbCheck::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn fractal(&self) -> Result<Fractal, JuliaError> {
        Ok(match self.fractal {
            FractalKinds::Mandelbrot => MandelbrotParams::new(self.bulb_check).into(),
            FractalKinds::Julia => JuliaParams::new(self.julia.cx, self.julia.cy)?.into(),
        })
    }

    /// Constructs the engine, which renders its first frame immediately.
    pub fn build_engine(&self) -> Result<FractalEngine, ConfigError> {
        Ok(FractalEngine::with_viewport(
            self.fractal()?,
            self.viewport,
            self.max_iterations,
            self.width,
            self.height,
            palette_factory(self.palette),
        )?)
    }
}
