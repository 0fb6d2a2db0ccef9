use std::path::Path;

use crate::core::data::raster::Raster;

pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
