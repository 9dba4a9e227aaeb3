use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;

use crate::error::RenderError;

/// Encode one rendered surface as a PNG, creating parent directories as
/// needed. Failures map to `RenderError::Encode` so the orchestrator can
/// skip the single asset.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            source: e,
        })
}
