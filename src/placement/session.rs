//! Pending placements keyed by the actor editing them
//!
//! Each actor has at most one QR code in progress. Committing checks the
//! world's height limit before writing anything.

use crate::io::error::{PlacementError, Result};
use crate::placement::engine::QrPlacement;
use crate::world::sink::VoxelSink;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, warn};

/// Registry of in-progress placements, one per actor
#[derive(Debug)]
pub struct PlacementSessions<K, W> {
    pending: HashMap<K, QrPlacement<W>>,
}

impl<K, W> Default for PlacementSessions<K, W> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, W: VoxelSink> PlacementSessions<K, W> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand a placement to an actor, replacing any previous one
    ///
    /// A replaced placement that was previewing has its overlay retracted.
    ///
    /// # Errors
    ///
    /// Returns the sink error raised while retracting the replaced overlay;
    /// the new placement is stored regardless
    pub fn begin(&mut self, actor: K, placement: QrPlacement<W>) -> Result<()> {
        if let Some(mut previous) = self.pending.insert(actor, placement)
            && previous.is_previewing()
        {
            previous.undo_preview()?;
        }
        Ok(())
    }

    /// Placement pending for an actor
    pub fn get(&self, actor: &K) -> Option<&QrPlacement<W>> {
        self.pending.get(actor)
    }

    /// Mutable placement pending for an actor
    pub fn get_mut(&mut self, actor: &K) -> Option<&mut QrPlacement<W>> {
        self.pending.get_mut(actor)
    }

    /// Mutable placement pending for an actor, or `NoPendingPlacement`
    ///
    /// # Errors
    ///
    /// Returns `NoPendingPlacement` if the actor has nothing in progress
    pub fn require(&mut self, actor: &K) -> Result<&mut QrPlacement<W>> {
        self.pending
            .get_mut(actor)
            .ok_or(PlacementError::NoPendingPlacement)
    }

    /// Whether an actor has a placement in progress
    pub fn contains(&self, actor: &K) -> bool {
        self.pending.contains_key(actor)
    }

    /// Number of pending placements
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no placement is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop an actor's placement, retracting its overlay first
    ///
    /// Returns whether a placement was pending.
    ///
    /// # Errors
    ///
    /// Returns the sink error raised while retracting the overlay; the
    /// placement stays pending in that case
    pub fn cancel(&mut self, actor: &K) -> Result<bool> {
        let Some(placement) = self.pending.get_mut(actor) else {
            return Ok(false);
        };
        if placement.is_previewing() {
            placement.undo_preview()?;
        }
        self.pending.remove(actor);
        Ok(true)
    }

    /// Place an actor's code and end its session
    ///
    /// # Errors
    ///
    /// Returns `NoPendingPlacement` if the actor has nothing in progress,
    /// `OutOfHeightLimit` if the area leaves the world's vertical range, or a
    /// sink error from the commit. The placement stays pending unless its
    /// voxels were already written when the error occurred.
    pub fn commit(&mut self, actor: &K) -> Result<QrPlacement<W>> {
        let placement = self.require(actor)?;
        if !placement.fits_height() {
            let range = placement.world().height_range();
            let (lowest, highest) = placement.height_span().unwrap_or_default();
            return Err(PlacementError::OutOfHeightLimit {
                lowest,
                highest,
                min_y: *range.start(),
                max_y: *range.end(),
            });
        }
        if let Err(error) = placement.place().map(|_| ()) {
            if placement.is_placed() {
                warn!(%error, "placed QR code but failed to notify viewers");
                self.pending.remove(actor);
            }
            return Err(error);
        }
        debug!(remaining = self.pending.len() - 1, "committed pending placement");
        self.pending
            .remove(actor)
            .ok_or(PlacementError::NoPendingPlacement)
    }
}
