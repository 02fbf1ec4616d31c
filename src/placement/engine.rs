//! QR code placement with live preview and a one-way commit
//!
//! A placement starts out editing. [`QrPlacement::preview`] overlays the
//! computed voxels on every viewer of the affected regions without touching the
//! world; [`QrPlacement::undo_preview`] restores what the world really holds.
//! Edits made while previewing refresh the overlay. [`QrPlacement::place`]
//! writes the voxels for good, after which every mutator fails.
//!
//! Refreshes only ever restore cells of the current area. A forced refresh
//! (orientation, magnifier, border) restores the new area and then draws it;
//! an unforced one (rotation, turning) draws over the old overlay directly.
//! Cells of the old overlay that fall outside the new area are never restored,
//! so shrinking or reorienting a previewed code leaves them visible to viewers
//! even on a forced refresh. [`QrPlacement::move_to`] is the exception: it
//! retracts the old area before drawing at the new anchor.

use crate::io::error::{Result, WithOperation, already_placed, non_negative};
use crate::matrix::{MatrixTransform, Rotation};
use crate::placement::builder::QrPlacementBuilder;
use crate::placement::geometry::{Layout, VoxelMap, calculate_area, height_span};
use crate::placement::orientation::Orientation;
use crate::world::batch::send_blocks;
use crate::world::sink::{BlockUpdate, Material, VoxelSink};
use glam::IVec3;
use tracing::{debug, info};

/// A QR code being positioned in a voxel world
#[derive(Debug)]
pub struct QrPlacement<W> {
    world: W,
    anchor: IVec3,
    layout: Layout,
    foreground: Material,
    background: Material,
    matrix: MatrixTransform,
    area: VoxelMap,
    previewing: bool,
    placed: bool,
}

impl<W: VoxelSink> QrPlacement<W> {
    /// Start configuring a placement
    pub fn builder() -> QrPlacementBuilder<W> {
        QrPlacementBuilder::new()
    }

    // Called by the builder once every field is validated
    pub(crate) fn assemble(
        world: W,
        anchor: IVec3,
        layout: Layout,
        foreground: Material,
        background: Material,
        matrix: MatrixTransform,
    ) -> Result<Self> {
        let area = calculate_area(&matrix, anchor, &layout)?;
        debug!(
            orientation = %layout.orientation,
            voxels = area.len(),
            "calculated initial area"
        );
        Ok(Self {
            world,
            anchor,
            layout,
            foreground,
            background,
            matrix,
            area,
            previewing: false,
            placed: false,
        })
    }

    /// Fail if the code has already been placed
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` once [`Self::place`] has succeeded
    pub fn check_placed(&self, operation: &'static str) -> Result<()> {
        if self.placed {
            return Err(already_placed(operation));
        }
        Ok(())
    }

    /// Whether the code has been committed to the world
    pub const fn is_placed(&self) -> bool {
        self.placed
    }

    /// Whether an overlay is currently shown to viewers
    pub const fn is_previewing(&self) -> bool {
        self.previewing
    }

    /// Computed voxel map
    pub const fn area(&self) -> &VoxelMap {
        &self.area
    }

    /// World the code is placed into
    pub const fn world(&self) -> &W {
        &self.world
    }

    /// Give back the world handle
    pub fn into_world(self) -> W {
        self.world
    }

    /// Anchor coordinate
    pub const fn anchor(&self) -> IVec3 {
        self.anchor
    }

    /// Current layout parameters
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current orientation
    pub const fn orientation(&self) -> Orientation {
        self.layout.orientation
    }

    /// Current magnifier
    pub const fn magnifier(&self) -> i32 {
        self.layout.magnifier
    }

    /// Current border size
    pub const fn border_size(&self) -> i32 {
        self.layout.border_size
    }

    /// Whether rows are mirrored
    pub const fn is_turned(&self) -> bool {
        self.layout.turned
    }

    /// Rotation of the owned matrix
    pub const fn rotation(&self) -> Rotation {
        self.matrix.rotation()
    }

    /// Material used for foreground cells
    pub const fn foreground(&self) -> Material {
        self.foreground
    }

    /// Material used for background cells
    pub const fn background(&self) -> Material {
        self.background
    }

    /// Owned matrix
    pub const fn matrix(&self) -> &MatrixTransform {
        &self.matrix
    }

    /// Lowest and highest y of the area, `None` if nothing would be placed
    pub fn height_span(&self) -> Option<(i32, i32)> {
        height_span(&self.area)
    }

    /// Whether the whole area lies inside the world's buildable height range
    pub fn fits_height(&self) -> bool {
        let range = self.world.height_range();
        self.height_span()
            .is_none_or(|(low, high)| range.contains(&low) && range.contains(&high))
    }

    /// Change the orientation
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<&mut Self> {
        self.check_placed("change orientation")?;
        if orientation != self.layout.orientation {
            self.relayout(Layout {
                orientation,
                ..self.layout
            })?;
            self.refresh_preview(true)?;
        }
        Ok(self)
    }

    /// Change the number of voxels per cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, `InvalidArgument` for a
    /// negative or oversized magnifier, or a sink error from the refresh
    pub fn set_magnifier(&mut self, magnifier: i32) -> Result<&mut Self> {
        self.check_placed("change magnifier")?;
        non_negative("magnifier", magnifier)?;
        if magnifier != self.layout.magnifier {
            self.relayout(Layout {
                magnifier,
                ..self.layout
            })?;
            self.refresh_preview(true)?;
        }
        Ok(self)
    }

    /// Change the border width
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, `InvalidArgument` for a
    /// negative or oversized border, or a sink error from the refresh
    pub fn set_border_size(&mut self, border_size: i32) -> Result<&mut Self> {
        self.check_placed("change border size")?;
        non_negative("border size", border_size)?;
        if border_size != self.layout.border_size {
            self.relayout(Layout {
                border_size,
                ..self.layout
            })?;
            self.refresh_preview(true)?;
        }
        Ok(self)
    }

    /// Move the anchor
    ///
    /// While previewing, the old area is restored before the code is drawn at
    /// the new anchor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn move_to(&mut self, anchor: IVec3) -> Result<&mut Self> {
        self.check_placed("move")?;
        if anchor != self.anchor {
            let area = calculate_area(&self.matrix, anchor, &self.layout)?;
            let previewing = self.previewing;
            if previewing {
                self.undo_preview()?;
            }
            self.area = area;
            self.anchor = anchor;
            if previewing {
                self.preview()?;
            }
        }
        Ok(self)
    }

    /// Rotate the matrix a quarter turn clockwise
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn rotate(&mut self) -> Result<&mut Self> {
        self.check_placed("rotate")?;
        self.matrix.rotate();
        self.recalculate()?;
        self.refresh_preview(false)?;
        Ok(self)
    }

    /// Rotate the matrix a quarter turn counter-clockwise
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn rotate_ccw(&mut self) -> Result<&mut Self> {
        self.check_placed("rotate")?;
        self.matrix.rotate_ccw();
        self.recalculate()?;
        self.refresh_preview(false)?;
        Ok(self)
    }

    /// Jump to an absolute rotation
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<&mut Self> {
        self.check_placed("rotate")?;
        if rotation != self.matrix.rotation() {
            self.matrix.set_rotation(rotation);
            self.recalculate()?;
            self.refresh_preview(false)?;
        }
        Ok(self)
    }

    /// Toggle vertical mirroring
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or a sink error from the refresh
    pub fn turn(&mut self) -> Result<&mut Self> {
        self.check_placed("turn")?;
        self.relayout(Layout {
            turned: !self.layout.turned,
            ..self.layout
        })?;
        self.refresh_preview(false)?;
        Ok(self)
    }

    /// Show the computed voxels to every viewer of the affected regions
    ///
    /// Always re-sends, so it doubles as a refresh after outside changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or the sink's notification error
    pub fn preview(&mut self) -> Result<()> {
        self.check_placed("preview")?;
        let updates = self.overlay();
        send_blocks(&mut self.world, &updates).with_operation("preview")?;
        self.previewing = true;
        Ok(())
    }

    /// Show viewers what the world really holds under the overlay
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` after placement, or the sink's query or
    /// notification error
    pub fn undo_preview(&mut self) -> Result<()> {
        self.check_placed("undo preview")?;
        let updates = self
            .area
            .keys()
            .map(|&position| {
                self.world
                    .query_material(position)
                    .map(|material| BlockUpdate::new(position, material))
            })
            .collect::<Result<Vec<_>>>()
            .with_operation("undo preview")?;
        send_blocks(&mut self.world, &updates).with_operation("undo preview")?;
        self.previewing = false;
        Ok(())
    }

    /// Redraw the overlay if one is shown
    ///
    /// A forced refresh restores the world under the current area before
    /// drawing the overlay; an unforced one draws over the old overlay directly.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::undo_preview`] and [`Self::preview`]
    pub fn refresh_preview(&mut self, forced: bool) -> Result<()> {
        if self.previewing {
            if forced {
                self.undo_preview()?;
            }
            self.preview()?;
        }
        Ok(())
    }

    /// Write the voxels into the world and show them to viewers
    ///
    /// Once every write has succeeded the code counts as placed, even if
    /// notifying viewers then fails.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if already placed, or the sink's write or
    /// notification error
    pub fn place(&mut self) -> Result<&mut Self> {
        self.check_placed("place")?;
        let updates = self.overlay();
        for update in &updates {
            self.world
                .set_material(update.position, update.material)
                .with_operation("place")?;
        }
        self.placed = true;
        self.previewing = false;
        send_blocks(&mut self.world, &updates).with_operation("place")?;
        info!(
            anchor = %self.anchor,
            orientation = %self.layout.orientation,
            voxels = updates.len(),
            "placed QR code"
        );
        Ok(self)
    }

    fn overlay(&self) -> Vec<BlockUpdate> {
        self.area
            .iter()
            .map(|(&position, &foreground)| {
                let material = if foreground {
                    self.foreground
                } else {
                    self.background
                };
                BlockUpdate::new(position, material)
            })
            .collect()
    }

    // Layout is only replaced once the new area has been computed
    fn relayout(&mut self, layout: Layout) -> Result<()> {
        self.area = calculate_area(&self.matrix, self.anchor, &layout)?;
        self.layout = layout;
        debug!(
            orientation = %layout.orientation,
            magnifier = layout.magnifier,
            border_size = layout.border_size,
            turned = layout.turned,
            voxels = self.area.len(),
            "recalculated area"
        );
        Ok(())
    }

    fn recalculate(&mut self) -> Result<()> {
        self.relayout(self.layout)
    }
}
