//! Perceptual color difference scaled to the 0..=100 range
//!
//! Every search strategy measures candidates with this one metric, so
//! their results stay directly comparable.

use crate::color::Rgb;

/// Sentinel distance that orders worse than any measurable difference
///
/// Used for out-of-range climb neighbors and as the initial best value
/// before any candidate has been measured.
pub const NO_MATCH: f64 = 101.0;

// Red-mean distance between pure black and pure white, the metric's extreme
const FULL_SCALE: f64 = 764.833_966_357_241_5;

/// Red-mean weighted Euclidean distance between two colors
///
/// Channel differences are weighted by the mean red intensity to
/// approximate perceptual non-uniformity, then scaled so the
/// black-to-white distance measures exactly 100. Symmetric, and zero
/// for identical colors.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);

    let red_mean = (f64::from(a.r) + f64::from(b.r)) / 2.0;
    let weight_r = 2.0 + red_mean / 256.0;
    let weight_b = 2.0 + (255.0 - red_mean) / 256.0;

    let weighted = weight_r.mul_add(dr * dr, 4.0_f64.mul_add(dg * dg, weight_b * (db * db)));

    weighted.sqrt() * 100.0 / FULL_SCALE
}
