use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;

/// Writes rasters as binary PPM (P6) images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, raster: &Raster, mut writer: impl Write) -> std::io::Result<()> {
        // P6 means binary RGB, followed by width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", raster.width(), raster.height())?;
        writeln!(writer, "255")?;
        writer.write_all(&raster.to_rgb_bytes())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(filepath)?;
        self.encode(raster, BufWriter::new(file))?;

        info!("wrote {}x{} image to {}", raster.width(), raster.height(), filepath.display());
        Ok(())
    }
}
