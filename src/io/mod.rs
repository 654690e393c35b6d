//! Input/output operations and error handling
//!
//! This module contains the ambient plumbing around the engine:
//! - Command-line interface and run orchestration
//! - Image file reading, decoding, and PNG encoding
//! - Progress display
//! - Error types and runtime defaults

/// Command-line interface for mosaic generation
pub mod cli;
/// Runtime defaults and safety limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding, PNG encoding, and file helpers
pub mod image;
/// Pipeline progress display
pub mod progress;
