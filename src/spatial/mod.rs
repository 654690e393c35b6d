//! Block grid geometry, color sampling, and mosaic assembly
//!
//! This module contains the image-space half of the pipeline:
//! - Partitioning the resized target into a block grid
//! - Average color extraction for regions and candidates
//! - Tiling matched candidates back into the composite

/// Row and mosaic compositing
pub mod assembly;
/// Block grid partitioning of the target image
pub mod grid;
/// Average color extraction and candidate preparation
pub mod sampler;

pub use grid::BlockGrid;
