//! Image decoding, PNG encoding, and file helpers

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Decode raw bytes into an image
///
/// # Errors
///
/// Returns [`MosaicError::Decode`] when the bytes are not a valid raster
/// image in a supported format.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| MosaicError::Decode { source })
}

/// Encode an RGB image as PNG bytes
///
/// The encoding is deterministic: identical pixels produce identical
/// bytes.
///
/// # Errors
///
/// Returns [`MosaicError::Encode`] when the encoder fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|source| MosaicError::Encode { source })?;
    Ok(bytes)
}

/// Read a file's raw bytes
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the file cannot be read.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read image",
        source,
    })
}

/// Write bytes to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when a directory cannot be
/// created or the file cannot be written.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    std::fs::write(path, bytes).map_err(|source| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "write output",
        source,
    })
}
