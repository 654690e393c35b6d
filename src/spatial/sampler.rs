//! Average color extraction and candidate pool preparation

use crate::color::Rgb;
use crate::io::error::{MosaicError, Result, computation_error, invalid_parameter};
use crate::io::image::decode_bytes;
use crate::spatial::grid::BlockGrid;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use ndarray::Array2;

/// A resized pool image with its precomputed average color
///
/// The pool is fixed for one mosaic run; candidates are never mutated or
/// shared across runs.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Tile pixels, resized to the block footprint
    pub image: RgbImage,
    /// Average color over the whole tile
    pub color: Rgb,
}

/// Resize an image to exact pixel dimensions
///
/// Lanczos3 resampling, deterministic for identical input.
pub fn resize_exact(source: &DynamicImage, width: u32, height: u32) -> RgbImage {
    source
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgb8()
}

/// Average color of the `size` x `size` region at (`left`, `top`)
///
/// Channels are averaged independently and rounded to nearest.
///
/// # Errors
///
/// Returns [`MosaicError::Bounds`] when the region exceeds the image
/// extents, and [`MosaicError::InvalidParameter`] for a zero-size
/// region.
pub fn region_average(source: &RgbImage, left: u32, top: u32, size: u32) -> Result<Rgb> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"region size must be positive",
        ));
    }

    let (width, height) = source.dimensions();
    let in_bounds = left
        .checked_add(size)
        .is_some_and(|edge| edge <= width)
        && top.checked_add(size).is_some_and(|edge| edge <= height);
    if !in_bounds {
        return Err(MosaicError::Bounds {
            left,
            top,
            size,
            width,
            height,
        });
    }

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    for y in top..top + size {
        for x in left..left + size {
            if let Some(pixel) = source.get_pixel_checked(x, y) {
                let [r, g, b] = pixel.0;
                sum_r += u64::from(r);
                sum_g += u64::from(g);
                sum_b += u64::from(b);
            }
        }
    }

    let count = (u64::from(size) * u64::from(size)) as f64;
    Ok(Rgb::new(
        (sum_r as f64 / count).round() as u8,
        (sum_g as f64 / count).round() as u8,
        (sum_b as f64 / count).round() as u8,
    ))
}

/// Decode and resize every pool image into a square candidate tile
///
/// Order-preserving; each candidate's average color is precomputed over
/// the resized tile.
///
/// # Errors
///
/// Returns [`MosaicError::Decode`] when any buffer is not a valid image,
/// aborting the whole pool.
pub fn prepare_candidates<B: AsRef<[u8]>>(buffers: &[B], square_size: u32) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(buffers.len());

    for buffer in buffers {
        let image = resize_exact(&decode_bytes(buffer.as_ref())?, square_size, square_size);
        let color = region_average(&image, 0, 0, square_size)?;
        candidates.push(Candidate { image, color });
    }

    Ok(candidates)
}

/// Row-major grid of block average colors for the resized target
///
/// # Errors
///
/// Returns [`MosaicError::Bounds`] when a block falls outside the target,
/// which indicates a width/height/block-size mismatch upstream.
pub fn block_colors(target: &RgbImage, grid: &BlockGrid) -> Result<Array2<Rgb>> {
    let mut colors = Vec::with_capacity(grid.block_count());

    for block in grid.blocks() {
        let (left, top) = grid.origin(block);
        colors.push(region_average(target, left, top, grid.block_size())?);
    }

    Array2::from_shape_vec((grid.rows() as usize, grid.cols() as usize), colors)
        .map_err(|e| computation_error("block color grid", &e))
}
