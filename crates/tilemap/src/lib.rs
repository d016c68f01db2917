//! Chunked tile layers and the region shift engine.
//!
//! Infinite Tiled layers store their cells in rectangular chunks which may be sparse, unsorted, and have negative
//! origins.  This crate models a layer as an unordered slice of [Chunk]s addressed by world [TilePos], and provides
//! [RegionShift], which moves the non-empty tiles of a [Region] vertically across however many chunks that takes.
mod chunk;
mod errors;
mod region;
mod shift;
mod sparse_tiles;
mod tile_position;


pub use chunk::*;
pub use errors::*;
pub use region::*;
pub use shift::*;
pub use sparse_tiles::*;
pub use tile_position::*;
