//! Tiling of matched candidates into rows and the final composite

use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::{RgbImage, imageops};

/// Composite the row-major tile sequence into horizontal row strips
///
/// The sequence is chunked into `rows` rows of `cols` tiles each; each
/// chunk becomes one `cols * tile_size` wide strip.
///
/// # Errors
///
/// Returns [`MosaicError::InvalidParameter`] when the grid is degenerate
/// or the tile count does not equal `rows * cols`.
pub fn assemble_rows(
    tiles: &[&RgbImage],
    rows: u32,
    cols: u32,
    tile_size: u32,
) -> Result<Vec<RgbImage>> {
    if rows == 0 || cols == 0 || tile_size == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols} of {tile_size}px"),
            &"rows, columns and tile size must be positive",
        ));
    }

    let expected = rows as usize * cols as usize;
    if tiles.len() != expected {
        return Err(invalid_parameter(
            "tiles",
            &tiles.len(),
            &format!("expected {expected} tiles for a {rows}x{cols} grid"),
        ));
    }

    let mut strips = Vec::with_capacity(rows as usize);
    for chunk in tiles.chunks(cols as usize) {
        let mut strip = RgbImage::new(cols * tile_size, tile_size);
        for (index, tile) in chunk.iter().enumerate() {
            imageops::replace(&mut strip, *tile, index as i64 * i64::from(tile_size), 0);
        }
        strips.push(strip);
    }

    Ok(strips)
}

/// Stack row strips vertically into the final composite image
///
/// # Errors
///
/// Returns [`MosaicError::EmptyInput`] when there are no strips to
/// stack.
pub fn stack_rows(strips: &[RgbImage]) -> Result<RgbImage> {
    let first = strips.first().ok_or(MosaicError::EmptyInput {
        operation: "row stacking",
    })?;

    let width = first.width();
    let height = strips.iter().map(RgbImage::height).sum();
    let mut composite = RgbImage::new(width, height);

    let mut offset = 0i64;
    for strip in strips {
        imageops::replace(&mut composite, strip, 0, offset);
        offset += i64::from(strip.height());
    }

    Ok(composite)
}
