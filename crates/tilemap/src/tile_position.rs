//! World-space tile coordinates.

/// A cell address which is global across every chunk of a layer.
///
/// Tiled maps grow in every direction, so both axes may be negative.
#[derive(Debug, Copy, Clone, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct TilePos {
    pub x: i64,
    pub y: i64,
}

impl TilePos {
    pub const fn new(x: i64, y: i64) -> Self {
        TilePos { x, y }
    }

    #[must_use = "This function doesn't modify the position in place"]
    pub const fn offset_y(self, dy: i64) -> TilePos {
        TilePos {
            x: self.x,
            y: self.y + dy,
        }
    }
}

impl std::ops::Add for TilePos {
    type Output = TilePos;

    fn add(self, rhs: TilePos) -> TilePos {
        TilePos {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for TilePos {
    type Output = TilePos;

    fn sub(self, rhs: TilePos) -> TilePos {
        TilePos {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
