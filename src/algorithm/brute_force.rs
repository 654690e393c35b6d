//! Exhaustive pool scan, the quality baseline the climbers approximate

use crate::algorithm::BlockMatch;
use crate::color::{NO_MATCH, Rgb, distance};
use crate::io::error::{MosaicError, Result};
use crate::spatial::sampler::Candidate;

/// Find the pool candidate with the minimum distance to the target color
///
/// Scans every candidate in pool order with strict improvement, so exact
/// ties keep the first candidate encountered.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyPool`] when no candidates were supplied.
pub fn best_match(target: Rgb, pool: &[Candidate]) -> Result<BlockMatch> {
    let mut best: Option<BlockMatch> = None;
    let mut best_distance = NO_MATCH;

    for (candidate, entry) in pool.iter().enumerate() {
        let measured = distance(target, entry.color);
        if measured < best_distance {
            best_distance = measured;
            best = Some(BlockMatch {
                candidate,
                distance: measured,
            });
        }
    }

    best.ok_or(MosaicError::EmptyPool)
}
