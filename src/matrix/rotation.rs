//! Quarter-turn rotation state and grid rotation primitives

use crate::io::error::{PlacementError, Result, invalid_argument};
use ndarray::{Array2, s};
use std::fmt;
use std::str::FromStr;

/// Cumulative clockwise rotation of a matrix relative to its canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Canonical orientation
    #[default]
    Deg0,
    /// One quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns clockwise (one counter-clockwise)
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Rotation after one more clockwise quarter turn
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// Rotation after one counter-clockwise quarter turn
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg270,
            Self::Deg90 => Self::Deg0,
            Self::Deg180 => Self::Deg90,
            Self::Deg270 => Self::Deg180,
        }
    }

    /// Number of clockwise quarter turns from canonical
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Apply this rotation to a canonical grid
    pub fn apply(self, canonical: &Array2<bool>) -> Array2<bool> {
        (0..self.quarter_turns()).fold(canonical.clone(), |grid, _| rotate_clockwise(&grid))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for Rotation {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        let degrees = s
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid_argument("rotation", &s, &e))?;
        match degrees.rem_euclid(360) {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(invalid_argument(
                "rotation",
                &s,
                &"must be a multiple of 90 degrees",
            )),
        }
    }
}

/// Rotate a square grid a quarter turn clockwise
///
/// Cell `(r, c)` of the result is cell `(n-1-c, r)` of the input.
pub fn rotate_clockwise(grid: &Array2<bool>) -> Array2<bool> {
    grid.t().slice(s![.., ..;-1]).to_owned()
}

/// Rotate a square grid a quarter turn counter-clockwise
///
/// Cell `(r, c)` of the result is cell `(c, n-1-r)` of the input.
pub fn rotate_counter_clockwise(grid: &Array2<bool>) -> Array2<bool> {
    grid.t().slice(s![..;-1, ..]).to_owned()
}
