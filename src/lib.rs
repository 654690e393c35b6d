//! Photomosaic generation through block-by-block candidate matching
//!
//! The engine partitions a resized target image into a grid of square
//! blocks and replaces each block with the candidate image whose average
//! color best matches, under one of three interchangeable search
//! strategies: exhaustive scan, RGB channel-permutation hill climbing,
//! or multi-seed HSV hill climbing.

#![forbid(unsafe_code)]

/// Search strategies and the mosaic computation engine
pub mod algorithm;
/// Match statistics and color-space diagnostics
pub mod analysis;
/// Color model, distance metric, and candidate orderings
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Block grid geometry, sampling, and mosaic assembly
pub mod spatial;

pub use io::error::{MosaicError, Result};
