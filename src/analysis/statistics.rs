//! Match quality aggregation across one mosaic run

use crate::io::error::{MosaicError, Result};
use serde::Serialize;

/// Aggregate match statistics over all blocks of a run
///
/// Computed once after every block has matched; read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Mean color distance across all block matches
    pub average_distance: f64,
    /// Largest (worst) color distance across all block matches
    pub worst_distance: f64,
}

/// Aggregate a run's match distances into summary statistics
///
/// # Errors
///
/// Returns [`MosaicError::EmptyInput`] when no distances were collected,
/// which indicates a zero-block grid that configuration validation
/// should have rejected.
pub fn compute_match_info(distances: &[f64]) -> Result<MatchInfo> {
    if distances.is_empty() {
        return Err(MosaicError::EmptyInput {
            operation: "match statistics",
        });
    }

    let total: f64 = distances.iter().sum();
    let worst = distances.iter().copied().fold(0.0_f64, f64::max);

    Ok(MatchInfo {
        average_distance: total / distances.len() as f64,
        worst_distance: worst,
    })
}
