//! Diagnostic color-space report for client-side visualization
//!
//! The report describes the same resized target and pool the matcher
//! sees, but plays no part in matching itself. Field names follow the
//! external JSON contract.

use crate::color::Rgb;
use crate::color::ordering::{ChannelOrder, Hill};
use crate::spatial::sampler::Candidate;
use ndarray::Array2;
use serde::Serialize;

/// Parallel per-channel sequences for a set of colors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChannelSeries {
    /// Red channel values
    #[serde(rename = "R")]
    pub r: Vec<u8>,
    /// Green channel values
    #[serde(rename = "G")]
    pub g: Vec<u8>,
    /// Blue channel values
    #[serde(rename = "B")]
    pub b: Vec<u8>,
}

impl ChannelSeries {
    fn from_colors<I: IntoIterator<Item = Rgb>>(colors: I) -> Self {
        let mut series = Self::default();
        for color in colors {
            series.r.push(color.r);
            series.g.push(color.g);
            series.b.push(color.b);
        }
        series
    }
}

/// The candidate pool under each supported ordering, as hex colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedData {
    /// Hue, saturation, value ordering
    pub hsv_sorted: Vec<String>,
    /// Red, green, blue channel priority
    pub rgb_sorted: Vec<String>,
    /// Red, blue, green channel priority
    pub rbg_sorted: Vec<String>,
    /// Green, red, blue channel priority
    pub grb_sorted: Vec<String>,
    /// Green, blue, red channel priority
    pub gbr_sorted: Vec<String>,
    /// Blue, red, green channel priority
    pub brg_sorted: Vec<String>,
    /// Blue, green, red channel priority
    pub bgr_sorted: Vec<String>,
}

/// Color-space diagnostics for one target and pool pairing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorReport {
    /// Average color of every target block, row-major
    pub block_averages: ChannelSeries,
    /// Average color of every pool candidate, in input order
    pub small_image_averages: ChannelSeries,
    /// The pool under each supported ordering
    pub sorted_data: SortedData,
}

impl ColorReport {
    /// Build the report from sampled block colors and the prepared pool
    pub fn new(block_colors: &Array2<Rgb>, pool: &[Candidate]) -> Self {
        let pool_colors: Vec<Rgb> = pool.iter().map(|candidate| candidate.color).collect();

        let channel_hexes =
            |order: ChannelOrder| hex_sequence(&Hill::by_channels(&pool_colors, order));

        Self {
            block_averages: ChannelSeries::from_colors(block_colors.iter().copied()),
            small_image_averages: ChannelSeries::from_colors(pool_colors.iter().copied()),
            sorted_data: SortedData {
                hsv_sorted: hex_sequence(&Hill::by_hsv(&pool_colors)),
                rgb_sorted: channel_hexes(ChannelOrder::Rgb),
                rbg_sorted: channel_hexes(ChannelOrder::Rbg),
                grb_sorted: channel_hexes(ChannelOrder::Grb),
                gbr_sorted: channel_hexes(ChannelOrder::Gbr),
                brg_sorted: channel_hexes(ChannelOrder::Brg),
                bgr_sorted: channel_hexes(ChannelOrder::Bgr),
            },
        }
    }
}

fn hex_sequence(hill: &Hill) -> Vec<String> {
    hill.colors().map(Rgb::to_hex).collect()
}
