//! Error types for mosaic generation
//!
//! A run either fully succeeds with one composite plus statistics or
//! fails atomically with one of these errors; no partial results are
//! ever returned and nothing is retried.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Image bytes could not be decoded as a supported raster format
    Decode {
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// The composite image could not be encoded as PNG
    Encode {
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// A requested region exceeds the source image extents
    ///
    /// Usually caused by a width/height/block-size mismatch upstream.
    Bounds {
        /// Region left offset in pixels
        left: u32,
        /// Region top offset in pixels
        top: u32,
        /// Region edge length in pixels
        size: u32,
        /// Source image width in pixels
        width: u32,
        /// Source image height in pixels
        height: u32,
    },

    /// No candidate images were supplied
    ///
    /// Rejected before any block is processed.
    EmptyPool,

    /// An aggregation had nothing to aggregate
    ///
    /// Indicates a zero-block grid, which configuration validation
    /// rejects before any image work happens.
    EmptyInput {
        /// Description of the aggregation that failed
        operation: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A block match references a candidate outside the pool
    InvalidCandidateIndex {
        /// The invalid candidate index
        index: usize,
        /// Number of candidates in the pool
        pool_size: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { source } => {
                write!(f, "Failed to decode image data: {source}")
            }
            Self::Encode { source } => {
                write!(f, "Failed to encode mosaic output: {source}")
            }
            Self::Bounds {
                left,
                top,
                size,
                width,
                height,
            } => {
                write!(
                    f,
                    "Region {size}x{size} at ({left},{top}) exceeds image extents {width}x{height}"
                )
            }
            Self::EmptyPool => {
                write!(f, "Candidate pool is empty")
            }
            Self::EmptyInput { operation } => {
                write!(f, "No input for {operation}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCandidateIndex { index, pool_size } => {
                write!(
                    f,
                    "Candidate index {index} is out of bounds (pool size: {pool_size})"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source } | Self::Encode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode { source: err }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
