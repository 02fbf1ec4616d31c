//! Region-grouped, audience-deduplicated delivery of block updates

use crate::io::error::Result;
use crate::world::sink::{BlockUpdate, RegionKey, ViewerId, VoxelSink};
use std::collections::BTreeSet;
use tracing::trace;

/// Distinct regions touched by a set of updates, in sorted order
pub fn affected_regions(updates: &[BlockUpdate]) -> BTreeSet<RegionKey> {
    updates
        .iter()
        .map(|update| RegionKey::containing(update.position))
        .collect()
}

/// Union of the viewers of every region, each viewer listed once
pub fn audience<W: VoxelSink + ?Sized>(world: &W, regions: &BTreeSet<RegionKey>) -> Vec<ViewerId> {
    regions
        .iter()
        .flat_map(|&region| world.viewers_of(region))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Deliver updates as one bulk notification
///
/// A viewer observing several affected regions receives the whole batch once.
/// Nothing is sent when the batch or its audience is empty.
///
/// # Errors
///
/// Propagates any failure reported by the sink's `notify`
pub fn send_blocks<W: VoxelSink + ?Sized>(world: &mut W, updates: &[BlockUpdate]) -> Result<()> {
    if updates.is_empty() {
        return Ok(());
    }

    let regions = affected_regions(updates);
    let viewers = audience(&*world, &regions);
    trace!(
        updates = updates.len(),
        regions = regions.len(),
        viewers = viewers.len(),
        "sending block batch"
    );

    if viewers.is_empty() {
        return Ok(());
    }
    world.notify(&viewers, updates)
}
