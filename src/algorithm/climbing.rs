//! Hill-climbing strategies over sorted candidate orderings
//!
//! Both strategies race independent climbers and keep the best finisher.
//! Their tie-breaking differs deliberately: the RGB strategy compares
//! hills strictly (first of equals wins), the HSV strategy compares
//! climbers non-strictly (last of equals wins). The asymmetry decides
//! which candidate wins under exact ties, so it is part of the
//! observable contract.

use crate::algorithm::BlockMatch;
use crate::algorithm::climber::Climber;
use crate::color::ordering::Hill;
use crate::color::{NO_MATCH, Rgb};
use crate::io::error::{MosaicError, Result};

/// Climb every channel-permutation hill and keep the best final match
///
/// One climber starts at each hill's floor midpoint and climbs for at
/// most `climb_distance` steps. Hills are compared in their fixed build
/// order with strict improvement.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyPool`] when the orderings hold no
/// candidates.
pub fn best_channel_match(target: Rgb, hills: &[Hill], climb_distance: usize) -> Result<BlockMatch> {
    let mut best: Option<BlockMatch> = None;
    let mut best_distance = NO_MATCH;

    for hill in hills {
        let mut climber = Climber::new(hill, hill.midpoint(), target);
        climber.climb(target, climb_distance);

        if let Some(candidate) = climber.candidate() {
            if climber.best_distance() < best_distance {
                best_distance = climber.best_distance();
                best = Some(BlockMatch {
                    candidate,
                    distance: best_distance,
                });
            }
        }
    }

    best.ok_or(MosaicError::EmptyPool)
}

/// Race evenly spaced climbers over the HSV hill and keep the best final
/// match
///
/// Climbers are compared in spawn order with non-strict improvement, so
/// the last of equal finishers wins. The winning hill position maps back
/// to the original candidate through the ordering's back-reference.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyPool`] when the ordering holds no
/// candidates.
pub fn best_hsv_match(
    target: Rgb,
    hill: &Hill,
    climb_distance: usize,
    climbers: usize,
) -> Result<BlockMatch> {
    if hill.is_empty() {
        return Err(MosaicError::EmptyPool);
    }

    let mut best: Option<BlockMatch> = None;
    let mut best_distance = NO_MATCH;

    for start in spread_starts(hill.len(), climbers) {
        let mut climber = Climber::new(hill, start, target);
        climber.climb(target, climb_distance);

        if let Some(candidate) = climber.candidate() {
            if climber.best_distance() <= best_distance {
                best_distance = climber.best_distance();
                best = Some(BlockMatch {
                    candidate,
                    distance: best_distance,
                });
            }
        }
    }

    best.ok_or(MosaicError::EmptyPool)
}

/// Evenly spaced start positions for `climbers` cursors over `len` points
///
/// Start `i` sits at `floor(i * (len - 1) / (climbers - 1))`, placing the
/// first climber at the low end and the last at the high end. Fewer than
/// two climbers degenerate to a single start at position 0.
pub fn spread_starts(len: usize, climbers: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if climbers < 2 {
        return vec![0];
    }

    (0..climbers)
        .map(|i| i * (len - 1) / (climbers - 1))
        .collect()
}
