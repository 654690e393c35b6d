//! Run configuration and orchestration of one mosaic computation

use crate::algorithm::{BlockMatch, brute_force, climbing};
use crate::analysis::report::ColorReport;
use crate::analysis::statistics::{self, MatchInfo};
use crate::color::Rgb;
use crate::color::ordering::{ChannelOrder, Hill};
use crate::io::configuration::MAX_TARGET_DIMENSION;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{decode_bytes, encode_png};
use crate::spatial::BlockGrid;
use crate::spatial::assembly::{assemble_rows, stack_rows};
use crate::spatial::sampler::{Candidate, block_colors, prepare_candidates, resize_exact};
use image::RgbImage;
use ndarray::Array2;

/// Search strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive scan of the full pool per block
    Brute,
    /// One climber per RGB channel-permutation hill
    RgbHill,
    /// Evenly spaced climbers over a single HSV hill
    HsvHill,
}

/// Parameters for one mosaic computation
#[derive(Clone, Copy, Debug)]
pub struct MosaicConfig {
    /// Output mosaic width in pixels
    pub width: u32,
    /// Output mosaic height in pixels
    pub height: u32,
    /// Square block edge length in pixels
    pub block_size: u32,
    /// Search strategy
    pub algorithm: Algorithm,
    /// Maximum steps a climber may take (hill strategies only)
    pub climb_distance: usize,
    /// Number of climbers spread across the HSV hill (HSV strategy only)
    pub number_of_climbers: usize,
}

impl MosaicConfig {
    /// Check the configuration before any image work happens
    ///
    /// A configuration that passes here produces a non-degenerate grid,
    /// so every later aggregation has at least one block to work with.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] for zero dimensions,
    /// oversized dimensions, a zero or oversized block, a zero climb
    /// distance on the hill strategies, or fewer than two climbers on
    /// the HSV strategy.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{}x{}", self.width, self.height),
                &"target dimensions must be positive",
            ));
        }

        if self.width.max(self.height) > MAX_TARGET_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{}x{}", self.width, self.height),
                &format!("target dimensions cannot exceed {MAX_TARGET_DIMENSION}"),
            ));
        }

        if self.block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &"block size must be positive",
            ));
        }

        if self.block_size > self.width.min(self.height) {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &"block size cannot exceed either target dimension",
            ));
        }

        let climbs = matches!(self.algorithm, Algorithm::RgbHill | Algorithm::HsvHill);
        if climbs && self.climb_distance == 0 {
            return Err(invalid_parameter(
                "climb_distance",
                &self.climb_distance,
                &"climbing strategies need at least one step",
            ));
        }

        if self.algorithm == Algorithm::HsvHill && self.number_of_climbers < 2 {
            return Err(invalid_parameter(
                "number_of_climbers",
                &self.number_of_climbers,
                &"the HSV strategy needs at least two climbers",
            ));
        }

        Ok(())
    }
}

enum SearchMode {
    Brute,
    RgbHills {
        hills: Vec<Hill>,
        climb_distance: usize,
    },
    HsvHill {
        hill: Hill,
        climb_distance: usize,
        climbers: usize,
    },
}

/// Per-run search state: the pool plus any prepared orderings
///
/// Orderings are built once per run and shared, immutably, by every
/// block's search.
pub struct Matcher<'a> {
    pool: &'a [Candidate],
    mode: SearchMode,
}

impl<'a> Matcher<'a> {
    /// Prepare search state for the configured strategy
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPool`] when the pool is empty.
    pub fn new(pool: &'a [Candidate], config: &MosaicConfig) -> Result<Self> {
        if pool.is_empty() {
            return Err(MosaicError::EmptyPool);
        }

        let colors: Vec<Rgb> = pool.iter().map(|candidate| candidate.color).collect();

        let mode = match config.algorithm {
            Algorithm::Brute => SearchMode::Brute,
            Algorithm::RgbHill => SearchMode::RgbHills {
                hills: ChannelOrder::ALL
                    .iter()
                    .map(|&order| Hill::by_channels(&colors, order))
                    .collect(),
                climb_distance: config.climb_distance,
            },
            Algorithm::HsvHill => SearchMode::HsvHill {
                hill: Hill::by_hsv(&colors),
                climb_distance: config.climb_distance,
                climbers: config.number_of_climbers,
            },
        };

        Ok(Self { pool, mode })
    }

    /// Best-matching candidate for one block's average color
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPool`] from the underlying strategy;
    /// unreachable for a matcher built by [`Matcher::new`].
    pub fn best_match(&self, target: Rgb) -> Result<BlockMatch> {
        match &self.mode {
            SearchMode::Brute => brute_force::best_match(target, self.pool),
            SearchMode::RgbHills {
                hills,
                climb_distance,
            } => climbing::best_channel_match(target, hills, *climb_distance),
            SearchMode::HsvHill {
                hill,
                climb_distance,
                climbers,
            } => climbing::best_hsv_match(target, hill, *climb_distance, *climbers),
        }
    }
}

/// One finished mosaic: PNG bytes plus match statistics
#[derive(Clone, Debug)]
pub struct Mosaic {
    /// PNG-encoded composite image
    pub png: Vec<u8>,
    /// Aggregate match quality over all blocks
    pub match_info: MatchInfo,
}

/// Orchestrates one mosaic computation over a fixed target and pool
///
/// All decoding and resizing happens at construction; generation and
/// analysis then work from the same prepared data, so their outputs
/// describe the same images.
pub struct MosaicEngine {
    config: MosaicConfig,
    grid: BlockGrid,
    target: RgbImage,
    pool: Vec<Candidate>,
}

impl MosaicEngine {
    /// Validate the configuration, then decode and resize the target and
    /// every pool image
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] for a bad configuration,
    /// [`MosaicError::EmptyPool`] when no pool buffers were supplied, or
    /// [`MosaicError::Decode`] when any image fails to decode.
    pub fn new<B: AsRef<[u8]>>(
        config: MosaicConfig,
        target_bytes: &[u8],
        pool_buffers: &[B],
    ) -> Result<Self> {
        config.validate()?;
        if pool_buffers.is_empty() {
            return Err(MosaicError::EmptyPool);
        }

        let target = resize_exact(&decode_bytes(target_bytes)?, config.width, config.height);
        let pool = prepare_candidates(pool_buffers, config.block_size)?;
        let grid = BlockGrid::new(config.width, config.height, config.block_size);

        Ok(Self {
            config,
            grid,
            target,
            pool,
        })
    }

    /// Block grid of the resized target
    pub const fn grid(&self) -> BlockGrid {
        self.grid
    }

    /// The prepared candidate pool
    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    /// Average color of every block, row-major
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Bounds`] when a block falls outside the
    /// resized target.
    pub fn block_colors(&self) -> Result<Array2<Rgb>> {
        block_colors(&self.target, &self.grid)
    }

    /// Search state for the configured strategy
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPool`] when the pool is empty.
    pub fn matcher(&self) -> Result<Matcher<'_>> {
        Matcher::new(&self.pool, &self.config)
    }

    /// Tile the matched candidates into the composite and aggregate
    /// match statistics
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidCandidateIndex`] when a match
    /// references a candidate outside the pool, or any assembly,
    /// encoding, or aggregation error.
    pub fn compose(&self, matches: &[BlockMatch]) -> Result<Mosaic> {
        let mut tiles = Vec::with_capacity(matches.len());
        let mut distances = Vec::with_capacity(matches.len());

        for matched in matches {
            let candidate =
                self.pool
                    .get(matched.candidate)
                    .ok_or(MosaicError::InvalidCandidateIndex {
                        index: matched.candidate,
                        pool_size: self.pool.len(),
                    })?;
            tiles.push(&candidate.image);
            distances.push(matched.distance);
        }

        let strips = assemble_rows(
            &tiles,
            self.grid.rows(),
            self.grid.cols(),
            self.config.block_size,
        )?;
        let composite = stack_rows(&strips)?;

        Ok(Mosaic {
            png: encode_png(&composite)?,
            match_info: statistics::compute_match_info(&distances)?,
        })
    }

    /// Run the full pipeline: sample every block, match it, tile the
    /// winners, encode
    ///
    /// Blocks are processed in row-major order; any failure aborts the
    /// run with no partial output.
    ///
    /// # Errors
    ///
    /// Propagates the first error from sampling, matching, assembly, or
    /// encoding.
    pub fn generate(&self) -> Result<Mosaic> {
        let colors = self.block_colors()?;
        let matcher = self.matcher()?;

        let mut matches = Vec::with_capacity(colors.len());
        for &color in &colors {
            matches.push(matcher.best_match(color)?);
        }

        self.compose(&matches)
    }

    /// Diagnostic color report over the same resized target and pool
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Bounds`] when a block falls outside the
    /// resized target.
    pub fn analyze(&self) -> Result<ColorReport> {
        Ok(ColorReport::new(&self.block_colors()?, &self.pool))
    }
}
