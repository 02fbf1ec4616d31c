//! Projection of a matrix onto world coordinates

use crate::io::error::{Result, invalid_argument};
use crate::matrix::MatrixTransform;
use crate::placement::orientation::Orientation;
use glam::IVec3;
use std::collections::HashMap;

/// Desired state of every voxel covered by a code, `true` for foreground
pub type VoxelMap = HashMap<IVec3, bool>;

/// Shape parameters applied to the matrix before projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Face and growth direction in the world
    pub orientation: Orientation,
    /// Mirror the rows before projecting
    pub turned: bool,
    /// Voxels per matrix cell along each axis
    pub magnifier: i32,
    /// Background cells added around the magnified matrix
    pub border_size: i32,
}

impl Layout {
    /// Matrix as it will appear in the world: magnified, bordered, then mirrored if turned
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the magnifier or border size is negative
    /// or the result is too large
    pub fn effective_matrix(&self, matrix: &MatrixTransform) -> Result<MatrixTransform> {
        let effective = matrix.magnify(self.magnifier)?.border(self.border_size)?;
        Ok(if self.turned {
            effective.turn_vertically()
        } else {
            effective
        })
    }
}

/// Compute the voxel map of `matrix` laid out at `anchor`
///
/// An empty effective matrix (magnifier zero, no border) yields an empty map.
///
/// # Errors
///
/// Returns `InvalidArgument` if the layout cannot be applied to the matrix
pub fn calculate_area(matrix: &MatrixTransform, anchor: IVec3, layout: &Layout) -> Result<VoxelMap> {
    let effective = layout.effective_matrix(matrix)?;
    let size = effective.size();
    let last = index(size)? - 1;

    let mut area = VoxelMap::with_capacity(size * size);
    for (x, y, value) in effective.cells() {
        let offset = layout.orientation.offset(index(x)?, index(y)?, last);
        area.insert(anchor + offset, value);
    }
    Ok(area)
}

/// Lowest and highest y coordinate of an area, `None` when it is empty
pub fn height_span(area: &VoxelMap) -> Option<(i32, i32)> {
    area.keys().fold(None, |span, position| {
        Some(span.map_or((position.y, position.y), |(low, high): (i32, i32)| {
            (low.min(position.y), high.max(position.y))
        }))
    })
}

fn index(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|e| invalid_argument("matrix index", &value, &e))
}
