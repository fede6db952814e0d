//! PNG input and output for image nodes.

use std::path::Path;

use image::RgbImage;

use crate::error::{NodeError, Result};

/// Read an image file as 8-bit RGB, dropping any alpha channel.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| NodeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    Ok(img.to_rgb8())
}

/// Write an RGB image, format chosen by the file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| NodeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })?;

    Ok(())
}
