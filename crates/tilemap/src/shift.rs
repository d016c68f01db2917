//! Moving a region of a chunked layer up or down.
//!
//! Shifting is done in three passes over the whole layer rather than per chunk: collect every non-empty tile of the
//! source region into a [SparseTiles], clear the source region, then write the collected tiles at their destinations.
//! Because writes only ever read from the collected map, a source and destination which overlap can't pick up tiles
//! that were already moved, and tiles may cross into any chunk covering the destination.
use std::collections::HashSet;

use log::*;

use crate::*;

/// A region and the signed number of tiles to move it by on the Y axis.  Negative moves up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RegionShift {
    region: Region,
    offset: i64,
}

/// What happened to the tiles of one layer.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShiftStats {
    /// Non-empty tiles found in the source region.
    pub collected: usize,

    /// Collected tiles which landed in at least one chunk.
    pub delivered: usize,

    /// Collected tiles whose destination cell is not held by any chunk of the layer.  These are lost.
    pub dropped: usize,
}

impl RegionShift {
    pub fn new(region: Region, offset: i64) -> RegionShift {
        RegionShift { region, offset }
    }

    pub fn get_source(&self) -> &Region {
        &self.region
    }

    pub fn get_offset(&self) -> i64 {
        self.offset
    }

    /// The source region moved by the offset.
    pub fn destination(&self) -> Region {
        self.region.translate_y(self.offset)
    }

    /// Could applying this shift change the chunk?
    pub fn touches(&self, chunk: &Chunk) -> bool {
        chunk.overlaps(&self.region) || chunk.overlaps(&self.destination())
    }

    /// Apply this shift to every chunk of one layer.
    ///
    /// Chunks which overlap neither the source nor the destination are not visited.  Destination cells whose source
    /// cell was empty keep whatever they held before, unless they are also in the source region, in which case they are
    /// cleared.
    pub fn apply(&self, chunks: &mut [Chunk]) -> ShiftStats {
        let source = self.region;
        let destination = self.destination();

        let mut moving = SparseTiles::new();
        for chunk in chunks.iter().filter(|c| c.overlaps(&source)) {
            // Empty cells are not recorded, so a chunk covering the same cell twice can't erase a tile.
            for (pos, tile) in chunk.cells_within(&source) {
                if tile != EMPTY_TILE {
                    moving.set(pos, tile);
                }
            }
        }

        for chunk in chunks.iter_mut().filter(|c| c.overlaps(&source)) {
            chunk.fill_within(&source, EMPTY_TILE);
        }

        let mut delivered: HashSet<TilePos> = Default::default();
        for chunk in chunks.iter_mut().filter(|c| c.overlaps(&destination)) {
            for (pos, tile) in moving.iter() {
                if chunk.put(pos.offset_y(self.offset), tile) {
                    delivered.insert(pos);
                }
            }
        }

        let stats = ShiftStats {
            collected: moving.len(),
            delivered: delivered.len(),
            dropped: moving.len() - delivered.len(),
        };
        debug!(
            "Shift of {} by {}: collected={} delivered={} dropped={}",
            source, self.offset, stats.collected, stats.delivered, stats.dropped
        );
        stats
    }
}
