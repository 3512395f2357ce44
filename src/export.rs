use std::fs;
use std::path::Path;

use image::ImageFormat;

use crate::error::{ExportError, ExportResult};
use crate::raster::Raster;

/// Encode `raster` as PNG and write it to `path`.
///
/// Missing parent directories are created and an existing file is
/// overwritten. The raster itself is never modified.
pub fn save_png(raster: &Raster, path: &Path) -> ExportResult<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            log::debug!("Creating export directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    raster
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "Saved {}x{} drawing to {}",
        raster.width(),
        raster.height(),
        path.display()
    );
    Ok(())
}
