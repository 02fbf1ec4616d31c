//! Projection of QR code matrices onto voxel worlds
//!
//! A matrix is magnified, bordered, optionally mirrored and rotated, then laid
//! into the world in one of twelve orientations. The resulting voxels can be
//! previewed to connected viewers, edited live, and finally committed.

#![deny(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// QR matrix representation and grid transforms
pub mod matrix;
/// Orientation geometry, placement lifecycle and pending sessions
pub mod placement;
/// Voxel sink port, notification batching and an in-memory world
pub mod world;

pub use io::error::{PlacementError, Result};
pub use matrix::{MatrixTransform, Rotation};
pub use placement::{Orientation, QrPlacement};
