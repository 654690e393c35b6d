//! Local-search cursor over one sorted ordering
//!
//! A climber lives for the duration of one block's search and is
//! discarded after producing a result. It never shares state with other
//! climbers, including those racing over the same hill.

use crate::color::ordering::Hill;
use crate::color::{NO_MATCH, Rgb, distance};

/// Ephemeral search state: a position on one hill and the best distance
/// found so far
#[derive(Debug)]
pub struct Climber<'a> {
    hill: &'a Hill,
    position: usize,
    best_distance: f64,
}

impl<'a> Climber<'a> {
    /// Start a climber at the given hill position
    ///
    /// The starting point's distance to the target is the initial best.
    pub fn new(hill: &'a Hill, start: usize, target: Rgb) -> Self {
        let best_distance = hill
            .color_at(start)
            .map_or(NO_MATCH, |color| distance(target, color));

        Self {
            hill,
            position: start,
            best_distance,
        }
    }

    /// Climb toward the target color for at most `max_steps` moves
    ///
    /// Each step measures both neighbors (out-of-range neighbors count as
    /// [`NO_MATCH`]): move right when the right-hand distance is no worse
    /// than the current best and strictly better than the left-hand one,
    /// otherwise move left when the left-hand distance is no worse than
    /// the current best. A step with neither move is a local minimum and
    /// ends the climb, since every later step would measure the same
    /// neighbors again.
    pub fn climb(&mut self, target: Rgb, max_steps: usize) {
        if self.hill.is_empty() {
            return;
        }

        for _ in 0..max_steps {
            let right = self.neighbor_distance(target, self.position.checked_add(1));
            let left = self.neighbor_distance(target, self.position.checked_sub(1));

            if right <= self.best_distance && right < left {
                self.position += 1;
                self.best_distance = right;
            } else if left <= self.best_distance {
                self.position -= 1;
                self.best_distance = left;
            } else {
                break;
            }
        }
    }

    fn neighbor_distance(&self, target: Rgb, position: Option<usize>) -> f64 {
        position
            .and_then(|index| self.hill.color_at(index))
            .map_or(NO_MATCH, |color| distance(target, color))
    }

    /// Hill position of the best match found so far
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Distance of the best match found so far
    pub const fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Pool index of the best-matching candidate, via the hill's
    /// back-reference
    pub fn candidate(&self) -> Option<usize> {
        self.hill.point(self.position).map(|point| point.candidate)
    }
}
