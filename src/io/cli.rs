//! Command-line interface for generating a photomosaic from disk images

use crate::algorithm::executor::{Algorithm, MosaicConfig, MosaicEngine};
use crate::analysis::statistics::MatchInfo;
use crate::io::configuration::{
    ANALYSIS_SUFFIX, CANDIDATE_EXTENSIONS, DEFAULT_BLOCK_SIZE, DEFAULT_CLIMB_DISTANCE,
    DEFAULT_CLIMBERS, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, computation_error, invalid_parameter};
use crate::io::image::{decode_bytes, read_bytes, write_bytes};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Search strategy selection on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmArg {
    /// Exhaustive scan of the full pool per block
    Brute,
    /// One climber per RGB channel-permutation hill
    RgbHill,
    /// Evenly spaced climbers over a single HSV hill
    HsvHill,
}

impl AlgorithmArg {
    /// The engine-level strategy selector
    pub const fn to_algorithm(self) -> Algorithm {
        match self {
            Self::Brute => Algorithm::Brute,
            Self::RgbHill => Algorithm::RgbHill,
            Self::HsvHill => Algorithm::HsvHill,
        }
    }
}

#[derive(Parser)]
#[command(name = "mosatile")]
#[command(
    author,
    version,
    about = "Rebuild a target image as a mosaic of small candidate images"
)]
/// Command-line arguments for mosaic generation
pub struct Cli {
    /// Target image to rebuild as a mosaic
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of candidate tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Output mosaic width in pixels (defaults to the target's width)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Output mosaic height in pixels (defaults to the target's height)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Square block edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Brute)]
    pub algorithm: AlgorithmArg,

    /// Maximum climbing steps (hill strategies)
    #[arg(short, long, default_value_t = DEFAULT_CLIMB_DISTANCE)]
    pub climb_distance: usize,

    /// Number of climbers spread across the HSV hill
    #[arg(short = 'n', long, default_value_t = DEFAULT_CLIMBERS)]
    pub climbers: usize,

    /// Output path (defaults to the target path with a mosaic suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the color analysis report as JSON
    #[arg(long)]
    pub analysis: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one mosaic computation from the command line
pub struct MosaicProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Run the configured mosaic computation
    ///
    /// # Errors
    ///
    /// Returns an error if candidate collection, the computation itself,
    /// or output writing fails; nothing is written on failure.
    pub fn process(&mut self) -> Result<()> {
        let target_bytes = read_bytes(&self.cli.target)?;
        let tile_buffers = self.collect_tiles()?;

        let (width, height) = self.output_dimensions(&target_bytes)?;
        let config = MosaicConfig {
            width,
            height,
            block_size: self.cli.block_size,
            algorithm: self.cli.algorithm.to_algorithm(),
            climb_distance: self.cli.climb_distance,
            number_of_climbers: self.cli.climbers,
        };

        if let Some(pm) = &mut self.progress {
            pm.start_spinner("Preparing pool");
        }
        let engine = MosaicEngine::new(config, &target_bytes, &tile_buffers)?;

        let colors = engine.block_colors()?;
        let matcher = engine.matcher()?;

        if let Some(pm) = &mut self.progress {
            pm.start_stage("Matching blocks", colors.len());
        }
        let mut matches = Vec::with_capacity(colors.len());
        for &color in &colors {
            matches.push(matcher.best_match(color)?);
            if let Some(pm) = &self.progress {
                pm.advance();
            }
        }

        if let Some(pm) = &mut self.progress {
            pm.start_spinner("Compositing");
        }
        let mosaic = engine.compose(&matches)?;

        let output_path = self.output_path();
        write_bytes(&output_path, &mosaic.png)?;

        if self.cli.analysis {
            let report = engine.analyze()?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| computation_error("analysis serialization", &e))?;
            write_bytes(&self.analysis_path(), json.as_bytes())?;
        }

        if let Some(pm) = &mut self.progress {
            pm.finish();
        }

        self.report_result(&output_path, &mosaic.match_info);
        Ok(())
    }

    fn collect_tiles(&self) -> Result<Vec<Vec<u8>>> {
        if !self.cli.tiles.is_dir() {
            return Err(invalid_parameter(
                "tiles",
                &self.cli.tiles.display(),
                &"tile source must be a directory",
            ));
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.cli.tiles)? {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    CANDIDATE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                });
            if supported {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(MosaicError::EmptyPool);
        }

        paths.iter().map(|path| read_bytes(path)).collect()
    }

    fn output_dimensions(&self, target_bytes: &[u8]) -> Result<(u32, u32)> {
        if let (Some(width), Some(height)) = (self.cli.width, self.cli.height) {
            return Ok((width, height));
        }

        let decoded = decode_bytes(target_bytes)?;
        Ok((
            self.cli.width.unwrap_or_else(|| decoded.width()),
            self.cli.height.unwrap_or_else(|| decoded.height()),
        ))
    }

    fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::suffixed_path(&self.cli.target, OUTPUT_SUFFIX, "png"))
    }

    fn analysis_path(&self) -> PathBuf {
        Self::suffixed_path(&self.cli.target, ANALYSIS_SUFFIX, "json")
    }

    fn suffixed_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let file_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(file_name)
        } else {
            PathBuf::from(file_name)
        }
    }

    // Allow print for user feedback once the run has finished
    #[allow(clippy::print_stderr)]
    fn report_result(&self, path: &Path, info: &MatchInfo) {
        if !self.cli.quiet {
            eprintln!(
                "Wrote {} (average distance {:.2}, worst {:.2})",
                path.display(),
                info.average_distance,
                info.worst_distance
            );
        }
    }
}
