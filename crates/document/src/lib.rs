//! Shifting regions of Tiled `.tmx` documents in place.
//!
//! We don't parse the document into a tree.  Instead, the sections we care about (`<layer>` chunks and `<objectgroup>`
//! objects) are located in the raw text, rewritten, and spliced back, while every other byte is copied through as is.
//! This keeps diffs of edited maps down to the tiles and objects that actually moved.
//!
//! Anything that doesn't look the way Tiled writes it is left alone: a chunk with a missing attribute or a garbage cell
//! is logged and skipped rather than failing the whole document.
mod attributes;
mod errors;
mod object;
mod splice;

pub use errors::*;
pub use object::*;
pub use splice::*;

/// Pixels per tile, used to convert a tile region into the pixel space objects live in.
pub const DEFAULT_TILE_SIZE: u32 = 16;
