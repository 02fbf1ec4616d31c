//! Placement of QR matrices into a voxel world
//!
//! This module contains:
//! - The twelve orientations and their coordinate formulas
//! - Area computation from a matrix, anchor and layout
//! - The placement engine with its preview/commit lifecycle and builder
//! - A per-actor registry of pending placements

/// Builder for placements
pub mod builder;
/// Placement lifecycle: editing, previewing, placed
pub mod engine;
/// Matrix to world coordinate projection
pub mod geometry;
/// Orientation enum and offset table
pub mod orientation;
/// Per-actor pending placements
pub mod session;

pub use builder::QrPlacementBuilder;
pub use engine::QrPlacement;
pub use geometry::{Layout, VoxelMap, calculate_area};
pub use orientation::Orientation;
pub use session::PlacementSessions;
