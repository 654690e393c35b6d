//! Runtime defaults and safety limits for mosaic generation

// Default values for configurable parameters
/// Default square block edge length in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 20;

/// Default maximum climbing steps for the hill strategies
pub const DEFAULT_CLIMB_DISTANCE: usize = 10;

/// Default number of climbers spread across the HSV hill
pub const DEFAULT_CLIMBERS: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed target dimension in pixels
pub const MAX_TARGET_DIMENSION: u32 = 10_000;

// Output settings
/// Suffix added to mosaic output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to analysis report filenames
pub const ANALYSIS_SUFFIX: &str = "_analysis";

/// File extensions accepted when collecting candidate tiles
pub const CANDIDATE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
