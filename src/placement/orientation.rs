//! The twelve ways a matrix can be laid into the world
//!
//! World axes are right-handed with `y` vertical: east is `+x`, south is `+z`.
//! Horizontal orientations name the directions the matrix grows towards; the
//! vertical ones name the face the code is written on and whether rows run up
//! or down from the anchor.

use crate::io::error::{PlacementError, Result, invalid_argument};
use glam::IVec3;
use std::fmt;
use std::str::FromStr;

/// Placement orientation of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Flat, extending east and north of the anchor
    EastNorth,
    /// Flat, extending west and north of the anchor
    WestNorth,
    /// Flat, extending west and south of the anchor
    WestSouth,
    /// Flat, extending east and south of the anchor
    EastSouth,
    /// Upright, extending north and up, first row on top
    NorthUp,
    /// Upright, extending north and down, first row at the bottom
    NorthDown,
    /// Upright, extending south and up, first column at the south end
    SouthUp,
    /// Upright, extending south and down, first column at the south end
    SouthDown,
    /// Upright, extending east and up, first row on top
    WestUp,
    /// Upright, extending east and down, first row at the bottom
    WestDown,
    /// Upright, extending west and up, last column at the anchor
    EastUp,
    /// Upright, extending west and down, last column at the anchor
    EastDown,
}

impl Orientation {
    /// Every orientation
    pub const ALL: [Self; 12] = [
        Self::EastNorth,
        Self::WestNorth,
        Self::WestSouth,
        Self::EastSouth,
        Self::NorthUp,
        Self::NorthDown,
        Self::SouthUp,
        Self::SouthDown,
        Self::WestUp,
        Self::WestDown,
        Self::EastUp,
        Self::EastDown,
    ];

    /// Offset from the anchor of cell `(x, y)` in a matrix whose last index is `n`
    pub const fn offset(self, x: i32, y: i32, n: i32) -> IVec3 {
        match self {
            Self::EastNorth => IVec3::new(x, 0, y - n),
            Self::WestNorth => IVec3::new(x - n, 0, y - n),
            Self::WestSouth => IVec3::new(x - n, 0, y),
            Self::EastSouth => IVec3::new(x, 0, y),
            Self::NorthUp => IVec3::new(0, n - y, -x),
            Self::NorthDown => IVec3::new(0, y - n, -x),
            Self::SouthUp => IVec3::new(0, n - y, n - x),
            Self::SouthDown => IVec3::new(0, y - n, n - x),
            Self::EastUp => IVec3::new(x - n, n - y, 0),
            Self::EastDown => IVec3::new(x - n, y - n, 0),
            Self::WestUp => IVec3::new(x, n - y, 0),
            Self::WestDown => IVec3::new(x, y - n, 0),
        }
    }

    /// Whether the code lies flat on the ground plane
    pub const fn is_horizontal(self) -> bool {
        matches!(
            self,
            Self::EastNorth | Self::WestNorth | Self::WestSouth | Self::EastSouth
        )
    }

    /// Lower snake case name
    pub const fn name(self) -> &'static str {
        match self {
            Self::EastNorth => "east_north",
            Self::WestNorth => "west_north",
            Self::WestSouth => "west_south",
            Self::EastSouth => "east_south",
            Self::NorthUp => "north_up",
            Self::NorthDown => "north_down",
            Self::SouthUp => "south_up",
            Self::SouthDown => "south_down",
            Self::WestUp => "west_up",
            Self::WestDown => "west_down",
            Self::EastUp => "east_up",
            Self::EastDown => "east_down",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = PlacementError;

    /// Case-insensitive; accepts `_`, `-` or a space between the two words
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|orientation| orientation.name() == normalized)
            .ok_or_else(|| invalid_argument("orientation", &s, &"unknown orientation"))
    }
}
