//! Search strategies that match block colors against the candidate pool
//!
//! Three interchangeable strategies trade search cost for match quality:
//! an exhaustive scan, a six-hill RGB climb, and a multi-seed HSV climb.

/// Exhaustive baseline search over the unsorted pool
pub mod brute_force;
/// Local-search cursor shared by the climbing strategies
pub mod climber;
/// RGB and HSV hill-climbing strategies
pub mod climbing;
/// Run configuration, prepared search state, and mosaic orchestration
pub mod executor;

/// Best-matching candidate and its color distance for one block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockMatch {
    /// Index of the winning candidate in the unsorted pool
    pub candidate: usize,
    /// Color distance between the block average and the winner
    pub distance: f64,
}
