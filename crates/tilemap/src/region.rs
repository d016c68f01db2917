//! Inclusive tile rectangles and their pixel-space counterparts.
use crate::errors::*;
use crate::*;

/// A rectangle of tiles, inclusive on both corners.
///
/// Unlike most boxes, a region may be a single tile: `(3, 3)-(3, 3)` selects exactly one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Region {
    p1: TilePos,
    p2: TilePos,
}

impl Region {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Result<Region, RegionError> {
        if x1 > x2 || y1 > y2 {
            return Err(RegionError::Inverted { x1, y1, x2, y2 });
        }

        Ok(Region {
            p1: TilePos::new(x1, y1),
            p2: TilePos::new(x2, y2),
        })
    }

    /// The top left tile.
    pub fn get_p1(&self) -> TilePos {
        self.p1
    }

    /// The bottom right tile, which is part of the region.
    pub fn get_p2(&self) -> TilePos {
        self.p2
    }

    pub fn get_width(&self) -> i64 {
        self.p2.x - self.p1.x + 1
    }

    pub fn get_height(&self) -> i64 {
        self.p2.y - self.p1.y + 1
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        (self.p1.x..=self.p2.x).contains(&pos.x) && (self.p1.y..=self.p2.y).contains(&pos.y)
    }

    /// Does the half-open column span `[start, start + len)` intersect this region?
    pub fn overlaps_columns(&self, start: i64, len: i64) -> bool {
        start < self.p2.x + 1 && start + len > self.p1.x
    }

    /// Does the half-open row span `[start, start + len)` intersect this region?
    pub fn overlaps_rows(&self, start: i64, len: i64) -> bool {
        start < self.p2.y + 1 && start + len > self.p1.y
    }

    #[must_use = "This function doesn't modify the region in place"]
    pub fn translate_y(&self, dy: i64) -> Region {
        Region {
            p1: self.p1.offset_y(dy),
            p2: self.p2.offset_y(dy),
        }
    }

    /// Convert to pixel space, where the far edges of the last column and row are excluded.
    pub fn pixel_bounds(&self, tile_size: u32) -> PixelRect {
        let ts = f64::from(tile_size);
        PixelRect {
            x1: self.p1.x as f64 * ts,
            y1: self.p1.y as f64 * ts,
            x2: (self.p2.x + 1) as f64 * ts,
            y2: (self.p2.y + 1) as f64 * ts,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.p1, self.p2)
    }
}

/// A half-open rectangle in pixels: `[x1, x2) x [y1, y2)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }
}
