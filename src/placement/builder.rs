//! Step-by-step configuration of a [`QrPlacement`]

use crate::io::configuration::{DEFAULT_BORDER_SIZE, DEFAULT_MAGNIFIER};
use crate::io::error::{Result, invalid_argument, non_negative};
use crate::matrix::MatrixTransform;
use crate::placement::engine::QrPlacement;
use crate::placement::geometry::Layout;
use crate::placement::orientation::Orientation;
use crate::world::sink::{Material, VoxelSink};
use glam::IVec3;

/// Builder for [`QrPlacement`]
///
/// World, anchor, orientation, both materials and the matrix are required.
/// Magnifier and border size default to one and are validated by
/// [`Self::build`] before any area is computed.
#[derive(Debug)]
pub struct QrPlacementBuilder<W> {
    world: Option<W>,
    anchor: Option<IVec3>,
    orientation: Option<Orientation>,
    foreground: Option<Material>,
    background: Option<Material>,
    turned: bool,
    magnifier: i32,
    border_size: i32,
    content: Option<MatrixTransform>,
}

impl<W> Default for QrPlacementBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> QrPlacementBuilder<W> {
    /// Create a builder with default magnifier and border size
    pub const fn new() -> Self {
        Self {
            world: None,
            anchor: None,
            orientation: None,
            foreground: None,
            background: None,
            turned: false,
            magnifier: DEFAULT_MAGNIFIER,
            border_size: DEFAULT_BORDER_SIZE,
            content: None,
        }
    }

    /// World and anchor coordinate
    #[must_use]
    pub fn at(mut self, world: W, anchor: IVec3) -> Self {
        self.world = Some(world);
        self.anchor = Some(anchor);
        self
    }

    /// Orientation in the world
    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Material for foreground cells
    #[must_use]
    pub const fn foreground(mut self, material: Material) -> Self {
        self.foreground = Some(material);
        self
    }

    /// Material for background and border cells
    #[must_use]
    pub const fn background(mut self, material: Material) -> Self {
        self.background = Some(material);
        self
    }

    /// Mirror rows vertically
    #[must_use]
    pub const fn turned(mut self, turned: bool) -> Self {
        self.turned = turned;
        self
    }

    /// Voxels per matrix cell, must not be negative
    #[must_use]
    pub const fn magnifier(mut self, magnifier: i32) -> Self {
        self.magnifier = magnifier;
        self
    }

    /// Border width in cells, must not be negative
    #[must_use]
    pub const fn border_size(mut self, border_size: i32) -> Self {
        self.border_size = border_size;
        self
    }

    /// Matrix to place
    #[must_use]
    pub fn content(mut self, matrix: MatrixTransform) -> Self {
        self.content = Some(matrix);
        self
    }
}

impl<W: VoxelSink> QrPlacementBuilder<W> {
    /// Validate the configuration and compute the first area
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a required field is missing, the
    /// magnifier or border size is negative, or the scaled matrix is too large
    pub fn build(self) -> Result<QrPlacement<W>> {
        non_negative("magnifier", self.magnifier)?;
        non_negative("border size", self.border_size)?;

        let world = self.world.ok_or_else(|| missing("world"))?;
        let anchor = self.anchor.ok_or_else(|| missing("anchor"))?;
        let orientation = self.orientation.ok_or_else(|| missing("orientation"))?;
        let foreground = self.foreground.ok_or_else(|| missing("foreground"))?;
        let background = self.background.ok_or_else(|| missing("background"))?;
        let matrix = self.content.ok_or_else(|| missing("content"))?;

        let layout = Layout {
            orientation,
            turned: self.turned,
            magnifier: self.magnifier,
            border_size: self.border_size,
        };
        QrPlacement::assemble(world, anchor, layout, foreground, background, matrix)
    }
}

fn missing(parameter: &'static str) -> crate::io::error::PlacementError {
    invalid_argument(parameter, &"<unset>", &"required")
}
