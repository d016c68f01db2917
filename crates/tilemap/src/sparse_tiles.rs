//! [SparseTiles] is a map of tiles backed by a hashmap.
//!
//! It has no redeeming features, save for being obviously correct.  The shift engine uses one per call to hold the
//! tiles being moved, and the tests use it as the reference against which chunked layers are checked.  Memory is `O(n)`
//! on the number of non-empty tiles stored.
use std::collections::HashMap;

use crate::TilePos;

/// The tile index Tiled uses for an empty cell.
pub const EMPTY_TILE: u32 = 0;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SparseTiles {
    tiles: HashMap<TilePos, u32>,
}

impl SparseTiles {
    pub fn new() -> SparseTiles {
        Default::default()
    }

    /// Get a given tile, if one was set.  Otherwise, return [EMPTY_TILE].
    pub fn get(&self, pos: TilePos) -> u32 {
        self.tiles.get(&pos).copied().unwrap_or(EMPTY_TILE)
    }

    /// Set a tile.  Setting [EMPTY_TILE] forgets the position.
    pub fn set(&mut self, pos: TilePos, tile: u32) {
        if tile == EMPTY_TILE {
            self.tiles.remove(&pos);
        } else {
            self.tiles.insert(pos, tile);
        }
    }

    /// Iterate over all non-empty tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, u32)> + '_ {
        self.tiles.iter().map(|(p, t)| (*p, *t))
    }

    /// Number of non-empty tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
