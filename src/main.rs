use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use fractal_engine::{
    BulbCheck, EngineConfig, FilePresenterPort, FractalKinds, PaletteKinds, PpmFilePresenter,
    ViewportState,
};

/// Render one escape-time fractal frame to a PPM image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file providing the base configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    fractal: Option<FractalKinds>,

    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Complex-plane units per pixel
    #[arg(long)]
    zoom: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    x_offset: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    y_offset: Option<f64>,

    /// Real part of the Julia constant
    #[arg(long, allow_hyphen_values = true)]
    julia_cx: Option<f64>,

    /// Imaginary part of the Julia constant
    #[arg(long, allow_hyphen_values = true)]
    julia_cy: Option<f64>,

    #[arg(long, value_enum)]
    palette: Option<PaletteKinds>,

    /// Use a zero radius for the period-2 bulb test
    #[arg(long)]
    legacy_bulb_check: bool,

    #[arg(long, default_value = "output/fractal.ppm")]
    output: PathBuf,
}

impl Cli {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };

        if let Some(fractal) = self.fractal {
            config.fractal = fractal;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(palette) = self.palette {
            config.palette = palette;
        }
        if let Some(cx) = self.julia_cx {
            config.julia.cx = cx;
        }
        if let Some(cy) = self.julia_cy {
            config.julia.cy = cy;
        }
        if self.legacy_bulb_check {
            config.bulb_check = BulbCheck::Legacy;
        }

        let viewport = config.viewport;
        config.viewport = ViewportState::new(
            self.zoom.unwrap_or(viewport.zoom()),
            self.x_offset.unwrap_or(viewport.x_offset()),
            self.y_offset.unwrap_or(viewport.y_offset()),
        )
        .context("invalid viewport")?;

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;

    info!(
        "rendering {} at {}x{} with {} iterations",
        config.fractal, config.width, config.height, config.max_iterations
    );

    let engine = config.build_engine().context("failed to build engine")?;
    info!("render took {} ms", engine.latest_generation().elapsed_millis());

    PpmFilePresenter::new()
        .present(engine.raster(), &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
