//! Input/output, configuration and error handling

/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Voxel list export
pub mod export;
/// Matrix loading from images
pub mod image;
/// Batch progress display
pub mod progress;
