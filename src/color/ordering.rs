//! Sorted candidate orderings ("hills") searched by the climbing strategies
//!
//! Each ordering is derived data, built once per mosaic run and never
//! mutated during search. Every sorted position carries a back-reference
//! to the original pool index, because search returns a position in the
//! ordering rather than the candidate itself.

use crate::color::Rgb;
use crate::color::hsv::Hsv;

/// Channel priority for the six RGB lexicographic orderings
///
/// The variant order is the fixed order the RGB strategy climbs the
/// hills in, which matters for its tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red, then green, then blue
    Rgb,
    /// Red, then blue, then green
    Rbg,
    /// Green, then blue, then red
    Gbr,
    /// Green, then red, then blue
    Grb,
    /// Blue, then red, then green
    Brg,
    /// Blue, then green, then red
    Bgr,
}

impl ChannelOrder {
    /// All six permutations, in climb order
    pub const ALL: [Self; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Gbr,
        Self::Grb,
        Self::Brg,
        Self::Bgr,
    ];

    /// Sort key as a (primary, secondary, tertiary) channel tuple
    pub const fn key(self, color: Rgb) -> (u8, u8, u8) {
        match self {
            Self::Rgb => (color.r, color.g, color.b),
            Self::Rbg => (color.r, color.b, color.g),
            Self::Gbr => (color.g, color.b, color.r),
            Self::Grb => (color.g, color.r, color.b),
            Self::Brg => (color.b, color.r, color.g),
            Self::Bgr => (color.b, color.g, color.r),
        }
    }
}

/// One sorted position: a pool color plus its original index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HillPoint {
    /// Average color at this position
    pub color: Rgb,
    /// Index of the candidate in the unsorted pool
    pub candidate: usize,
}

/// An ordering of the candidate pool by a color key
#[derive(Clone, Debug)]
pub struct Hill {
    points: Vec<HillPoint>,
}

impl Hill {
    /// Build an ordering sorted by channel priority
    ///
    /// The sort is stable, so pool order breaks exact ties.
    pub fn by_channels(colors: &[Rgb], order: ChannelOrder) -> Self {
        let mut points = index_points(colors);
        points.sort_by_key(|point| order.key(point.color));
        Self { points }
    }

    /// Build an ordering sorted by hue, saturation, then value
    ///
    /// The sort is stable, so pool order breaks exact ties.
    pub fn by_hsv(colors: &[Rgb]) -> Self {
        let mut points = index_points(colors);
        points.sort_by(|a, b| Hsv::sort_cmp(a.color, b.color));
        Self { points }
    }

    /// Number of positions in the ordering
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ordering holds no candidates
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Floor midpoint, where the RGB strategy starts its climbers
    pub fn midpoint(&self) -> usize {
        self.points.len() / 2
    }

    /// The point at a sorted position
    pub fn point(&self, position: usize) -> Option<HillPoint> {
        self.points.get(position).copied()
    }

    /// The color at a sorted position
    pub fn color_at(&self, position: usize) -> Option<Rgb> {
        self.points.get(position).map(|point| point.color)
    }

    /// Colors in sorted order
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.points.iter().map(|point| point.color)
    }
}

fn index_points(colors: &[Rgb]) -> Vec<HillPoint> {
    colors
        .iter()
        .enumerate()
        .map(|(candidate, &color)| HillPoint { color, candidate })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ChannelOrder, Hill};
    use crate::color::Rgb;

    #[test]
    fn test_channel_ordering_priorities() {
        let colors = [
            Rgb::new(10, 200, 0),
            Rgb::new(10, 50, 0),
            Rgb::new(5, 255, 0),
        ];

        let hill = Hill::by_channels(&colors, ChannelOrder::Rgb);
        let sorted: Vec<usize> = (0..hill.len())
            .filter_map(|i| hill.point(i))
            .map(|point| point.candidate)
            .collect();

        // Red dominates, green breaks the tie between the first two
        assert_eq!(sorted, vec![2, 1, 0]);
    }

    #[test]
    fn test_back_reference_survives_sorting() {
        let colors = [Rgb::new(200, 0, 0), Rgb::new(100, 0, 0)];
        let hill = Hill::by_channels(&colors, ChannelOrder::Rgb);

        assert_eq!(hill.point(0).map(|p| p.candidate), Some(1));
        assert_eq!(hill.point(1).map(|p| p.candidate), Some(0));
    }

    #[test]
    fn test_stable_tie_break() {
        let colors = [Rgb::new(9, 9, 9); 3];
        let hill = Hill::by_hsv(&colors);

        let order: Vec<usize> = (0..hill.len())
            .filter_map(|i| hill.point(i))
            .map(|point| point.candidate)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
