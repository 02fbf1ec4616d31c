//! World-facing ports and implementations
//!
//! This module contains:
//! - The voxel sink trait and the material, viewer and region handles
//! - Batched, audience-deduplicated notification delivery
//! - An in-memory world used by the command-line tool and tests

/// Region-grouped block update delivery
pub mod batch;
/// In-memory voxel world
pub mod memory;
/// Voxel sink port and shared value types
pub mod sink;

pub use memory::MemoryWorld;
pub use sink::{BlockUpdate, Material, RegionKey, ViewerId, VoxelSink};
