//! Hash-map backed voxel world with recorded notifications
//!
//! Used by the command-line tool and by tests that need to observe exactly
//! what the placement engine wrote and sent.

use crate::io::configuration::{DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT};
use crate::io::error::{Result, sink_error};
use crate::world::sink::{BlockUpdate, Material, RegionKey, ViewerId, VoxelSink};
use glam::IVec3;
use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

/// One bulk send as observed by the world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipients of the batch
    pub viewers: Vec<ViewerId>,
    /// Updates carried by the batch
    pub updates: Vec<BlockUpdate>,
}

impl Notification {
    /// Material the batch shows at a coordinate, if it covers it
    pub fn material_at(&self, position: IVec3) -> Option<Material> {
        self.updates
            .iter()
            .find(|update| update.position == position)
            .map(|update| update.material)
    }
}

/// In-memory voxel world
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    blocks: HashMap<IVec3, Material>,
    subscriptions: HashMap<RegionKey, BTreeSet<ViewerId>>,
    notifications: Vec<Notification>,
    writes: usize,
    height_range: RangeInclusive<i32>,
    rejecting: bool,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorld {
    /// Create an empty world filled with air
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            subscriptions: HashMap::new(),
            notifications: Vec::new(),
            writes: 0,
            height_range: DEFAULT_MIN_HEIGHT..=DEFAULT_MAX_HEIGHT,
            rejecting: false,
        }
    }

    /// Create a world with a custom buildable vertical range
    pub fn with_height_range(min_y: i32, max_y: i32) -> Self {
        Self {
            height_range: min_y..=max_y,
            ..Self::new()
        }
    }

    /// Subscribe a viewer to a region
    pub fn add_viewer(&mut self, viewer: ViewerId, region: RegionKey) {
        self.subscriptions.entry(region).or_default().insert(viewer);
    }

    /// Remove a viewer from every region
    pub fn remove_viewer(&mut self, viewer: ViewerId) {
        for viewers in self.subscriptions.values_mut() {
            viewers.remove(&viewer);
        }
    }

    /// Make every subsequent write and notification fail
    pub const fn set_rejecting(&mut self, rejecting: bool) {
        self.rejecting = rejecting;
    }

    /// Material persisted at a coordinate
    pub fn material_at(&self, position: IVec3) -> Material {
        self.blocks.get(&position).copied().unwrap_or(Material::AIR)
    }

    /// Persist a material without counting it as an engine write
    pub fn fill(&mut self, position: IVec3, material: Material) {
        self.blocks.insert(position, material);
    }

    /// Every notification batch received so far
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain the notification log
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Number of persistent writes made through the sink
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Number of non-air voxels
    pub fn block_count(&self) -> usize {
        self.blocks
            .values()
            .filter(|&&material| material != Material::AIR)
            .count()
    }
}

impl VoxelSink for MemoryWorld {
    fn set_material(&mut self, position: IVec3, material: Material) -> Result<()> {
        if self.rejecting {
            return Err(sink_error(&format!("write to {position} rejected")));
        }
        self.blocks.insert(position, material);
        self.writes += 1;
        Ok(())
    }

    fn query_material(&self, position: IVec3) -> Result<Material> {
        Ok(self.material_at(position))
    }

    fn viewers_of(&self, region: RegionKey) -> Vec<ViewerId> {
        self.subscriptions
            .get(&region)
            .map(|viewers| viewers.iter().copied().collect())
            .unwrap_or_default()
    }

    fn notify(&mut self, viewers: &[ViewerId], updates: &[BlockUpdate]) -> Result<()> {
        if self.rejecting {
            return Err(sink_error(&"notification rejected"));
        }
        self.notifications.push(Notification {
            viewers: viewers.to_vec(),
            updates: updates.to_vec(),
        });
        Ok(())
    }

    fn height_range(&self) -> RangeInclusive<i32> {
        self.height_range.clone()
    }
}
