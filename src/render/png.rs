//! PNG output for stadium previews.

use std::path::Path;

use image::RgbaImage;

use crate::error::{HbsError, Result};

/// Write a rendered preview to a PNG file, creating parent directories.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| HbsError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    img.save(path).map_err(|e| HbsError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
