//! Voxel sink port and the value types that cross it
//!
//! The placement engine never touches a concrete world. Everything it needs
//! (persistent writes, reads of the current state, the audience of a region,
//! and transient notifications) goes through [`VoxelSink`].

use crate::io::configuration::{DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, REGION_SHIFT};
use crate::io::error::{Result, invalid_argument};
use glam::IVec3;
use std::cell::RefCell;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::str::FromStr;

/// Block material as a numeric id plus a 4-bit data value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Material {
    id: u16,
    data: u8,
}

impl Material {
    /// Empty space
    pub const AIR: Self = Self::new(0, 0);

    /// Create a material; `data` is truncated to its low 4 bits
    pub const fn new(id: u16, data: u8) -> Self {
        Self {
            id,
            data: data & 0xf,
        }
    }

    /// Unpack a material from its packed `id << 4 | data` form
    ///
    /// Returns `None` if the id does not fit in 16 bits.
    pub const fn from_full(full: u32) -> Option<Self> {
        let id = full >> 4;
        if id > u16::MAX as u32 {
            return None;
        }
        Some(Self::new(id as u16, (full & 0xf) as u8))
    }

    /// Packed `id << 4 | data` form
    pub const fn full(self) -> u32 {
        ((self.id as u32) << 4) | self.data as u32
    }

    /// Numeric block id
    pub const fn id(self) -> u16 {
        self.id
    }

    /// Data (variant) value
    pub const fn data(self) -> u8 {
        self.data
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.data)
    }
}

impl FromStr for Material {
    type Err = crate::io::error::PlacementError;

    /// Parse `"id"` or `"id:data"`
    fn from_str(s: &str) -> Result<Self> {
        let (id_part, data_part) = s.split_once(':').unwrap_or((s, "0"));
        let id = id_part
            .trim()
            .parse::<u16>()
            .map_err(|e| invalid_argument("material", &s, &e))?;
        let data = data_part
            .trim()
            .parse::<u8>()
            .map_err(|e| invalid_argument("material", &s, &e))?;
        if data > 0xf {
            return Err(invalid_argument(
                "material",
                &s,
                &"data value must fit in 4 bits",
            ));
        }
        Ok(Self::new(id, data))
    }
}

/// Handle of a connected viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewerId(pub u64);

/// A 16x16 column of the world; the unit viewers subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionKey {
    /// Region x index (`x >> 4`)
    pub x: i32,
    /// Region z index (`z >> 4`)
    pub z: i32,
}

impl RegionKey {
    /// Region containing a voxel coordinate
    pub const fn containing(position: IVec3) -> Self {
        Self {
            x: position.x >> REGION_SHIFT,
            z: position.z >> REGION_SHIFT,
        }
    }
}

/// Transient visual update of a single voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockUpdate {
    /// World coordinate of the voxel
    pub position: IVec3,
    /// Material viewers should display
    pub material: Material,
}

impl BlockUpdate {
    /// Create an update
    pub const fn new(position: IVec3, material: Material) -> Self {
        Self { position, material }
    }
}

/// World storage and viewer transport consumed by the placement engine
pub trait VoxelSink {
    /// Persistently write a material into the authoritative world state
    ///
    /// # Errors
    ///
    /// Returns a `Sink` error if the world refuses the write
    fn set_material(&mut self, position: IVec3, material: Material) -> Result<()>;

    /// Read the material currently persisted at a coordinate
    ///
    /// # Errors
    ///
    /// Returns a `Sink` error if the coordinate cannot be read
    fn query_material(&self, position: IVec3) -> Result<Material>;

    /// Viewers currently observing a region
    fn viewers_of(&self, region: RegionKey) -> Vec<ViewerId>;

    /// Send a non-persistent, highest-priority visual update to viewers
    ///
    /// # Errors
    ///
    /// Returns a `Sink` error if the transport rejects the batch
    fn notify(&mut self, viewers: &[ViewerId], updates: &[BlockUpdate]) -> Result<()>;

    /// Buildable vertical range of the world
    fn height_range(&self) -> RangeInclusive<i32> {
        DEFAULT_MIN_HEIGHT..=DEFAULT_MAX_HEIGHT
    }
}

impl<T: VoxelSink + ?Sized> VoxelSink for &mut T {
    fn set_material(&mut self, position: IVec3, material: Material) -> Result<()> {
        (**self).set_material(position, material)
    }

    fn query_material(&self, position: IVec3) -> Result<Material> {
        (**self).query_material(position)
    }

    fn viewers_of(&self, region: RegionKey) -> Vec<ViewerId> {
        (**self).viewers_of(region)
    }

    fn notify(&mut self, viewers: &[ViewerId], updates: &[BlockUpdate]) -> Result<()> {
        (**self).notify(viewers, updates)
    }

    fn height_range(&self) -> RangeInclusive<i32> {
        (**self).height_range()
    }
}

// Lets several pending placements share one world on a single thread
impl<T: VoxelSink + ?Sized> VoxelSink for Rc<RefCell<T>> {
    fn set_material(&mut self, position: IVec3, material: Material) -> Result<()> {
        self.borrow_mut().set_material(position, material)
    }

    fn query_material(&self, position: IVec3) -> Result<Material> {
        self.borrow().query_material(position)
    }

    fn viewers_of(&self, region: RegionKey) -> Vec<ViewerId> {
        self.borrow().viewers_of(region)
    }

    fn notify(&mut self, viewers: &[ViewerId], updates: &[BlockUpdate]) -> Result<()> {
        self.borrow_mut().notify(viewers, updates)
    }

    fn height_range(&self) -> RangeInclusive<i32> {
        self.borrow().height_range()
    }
}
