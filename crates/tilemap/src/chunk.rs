//! A chunk, one rectangle of an infinite layer.
//!
//! Chunks come from documents which may have been edited by hand, so the rows we hold are not trusted to match the
//! declared dimensions.  A cell only exists if it is inside both the declared size and the data actually present.
use crate::errors::*;
use crate::*;

#[derive(Debug, Clone)]
pub struct Chunk {
    origin: TilePos,
    width: u32,
    height: u32,
    rows: Vec<Vec<u32>>,
    dirty: bool,
}

impl Chunk {
    pub fn new(origin: TilePos, width: u32, height: u32, rows: Vec<Vec<u32>>) -> Chunk {
        Chunk {
            origin,
            width,
            height,
            rows,
            dirty: false,
        }
    }

    /// Parse the CSV body of a chunk element.
    ///
    /// Rows are separated by newlines and may end in a trailing comma.  Blank cells read as empty tiles.
    pub fn from_csv(origin: TilePos, width: u32, height: u32, text: &str) -> Result<Chunk, ChunkError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Chunk::new(origin, width, height, vec![]));
        }

        let mut rows = Vec::new();
        for (row, line) in trimmed.split('\n').enumerate() {
            let line = line.trim_end().trim_end_matches(',');
            let mut cells = Vec::new();
            for (column, cell) in line.split(',').enumerate() {
                let cell = cell.trim();
                if cell.is_empty() {
                    cells.push(EMPTY_TILE);
                    continue;
                }

                let tile = cell.parse::<u32>().map_err(|_| ChunkError::BadCell {
                    row,
                    column,
                    cell: cell.to_string(),
                })?;
                cells.push(tile);
            }
            rows.push(cells);
        }

        Ok(Chunk::new(origin, width, height, rows))
    }

    /// Serialize the grid the way Tiled does: comma separated, one row per line, a trailing comma on every row but the
    /// last.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            let line = row
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
        }
        out
    }

    pub fn get_origin(&self) -> TilePos {
        self.origin
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Has any write changed a value since this chunk was built?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Does the declared rectangle of this chunk intersect the region on both axes?
    pub fn overlaps(&self, region: &Region) -> bool {
        region.overlaps_columns(self.origin.x, i64::from(self.width))
            && region.overlaps_rows(self.origin.y, i64::from(self.height))
    }

    /// Convert a world position to `(row, column)` indices, if that cell exists.
    fn local(&self, pos: TilePos) -> Option<(usize, usize)> {
        let rel = pos - self.origin;
        if rel.x < 0 || rel.y < 0 || rel.x >= i64::from(self.width) || rel.y >= i64::from(self.height) {
            return None;
        }

        let (row, column) = (usize::try_from(rel.y).ok()?, usize::try_from(rel.x).ok()?);
        if column < self.rows.get(row)?.len() {
            Some((row, column))
        } else {
            None
        }
    }

    /// Read a cell by world position.  Returns `None` for cells this chunk does not hold.
    #[cfg(test)]
    pub(crate) fn get(&self, pos: TilePos) -> Option<u32> {
        let (row, column) = self.local(pos)?;
        Some(self.rows[row][column])
    }

    /// Write a cell by world position, returning whether this chunk holds that cell.
    pub fn put(&mut self, pos: TilePos, tile: u32) -> bool {
        let Some((row, column)) = self.local(pos) else {
            return false;
        };

        let cell = &mut self.rows[row][column];
        if *cell != tile {
            *cell = tile;
            self.dirty = true;
        }
        true
    }

    /// Iterate over every existing cell of this chunk which lies inside the region.
    pub fn cells_within<'a>(&'a self, region: &'a Region) -> impl Iterator<Item = (TilePos, u32)> + 'a {
        let width = self.width as usize;
        self.rows
            .iter()
            .take(self.height as usize)
            .enumerate()
            .flat_map(move |(row, cells)| {
                cells.iter().take(width).enumerate().map(move |(column, tile)| {
                    (self.origin + TilePos::new(column as i64, row as i64), *tile)
                })
            })
            .filter(move |(pos, _)| region.contains(*pos))
    }

    /// Set every existing cell inside the region to the given tile.
    pub fn fill_within(&mut self, region: &Region, tile: u32) {
        let positions = self
            .cells_within(region)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        for pos in positions {
            self.put(pos, tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tiled_csv() -> crate::Result<()> {
        let c = Chunk::from_csv(TilePos::new(-16, 0), 3, 2, "\n1,0,2,\n0,,3\n")?;
        assert_eq!(c.rows(), &[vec![1, 0, 2], vec![0, 0, 3]]);
        assert_eq!(c.to_csv(), "1,0,2,\n0,0,3");
        Ok(())
    }

    #[test]
    fn test_crlf_rows() -> crate::Result<()> {
        let c = Chunk::from_csv(TilePos::new(0, 0), 2, 2, "4,5,\r\n6,7\r\n")?;
        assert_eq!(c.rows(), &[vec![4, 5], vec![6, 7]]);
        Ok(())
    }

    #[test]
    fn test_bad_cell() {
        let err = Chunk::from_csv(TilePos::new(0, 0), 2, 1, "1,x").unwrap_err();
        assert!(matches!(
            err,
            ChunkError::BadCell {
                row: 0,
                column: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_origin_addressing() {
        let mut c = Chunk::new(TilePos::new(-2, -2), 2, 2, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(c.get(TilePos::new(-1, -1)), Some(4));
        assert_eq!(c.get(TilePos::new(0, -1)), None);
        assert!(!c.put(TilePos::new(-3, -2), 9));
        assert!(!c.is_dirty());

        assert!(c.put(TilePos::new(-2, -1), 3));
        assert!(!c.is_dirty(), "writing the same value is not a change");
        assert!(c.put(TilePos::new(-2, -1), 8));
        assert!(c.is_dirty());
    }

    /// A chunk declaring more rows and columns than it has must never be indexed past its data.
    #[test]
    fn test_short_chunk() -> crate::Result<()> {
        let mut c = Chunk::new(TilePos::new(0, 0), 4, 4, vec![vec![1, 2, 3, 4], vec![5]]);
        let region = Region::new(0, 0, 3, 3)?;
        let cells = c.cells_within(&region).collect::<Vec<_>>();
        assert_eq!(cells.len(), 5);

        assert!(!c.put(TilePos::new(1, 1), 9));
        assert!(!c.put(TilePos::new(0, 2), 9));
        c.fill_within(&region, EMPTY_TILE);
        assert_eq!(c.rows(), &[vec![0, 0, 0, 0], vec![0]]);
        Ok(())
    }

    #[test]
    fn test_overlaps_uses_declared_size() -> crate::Result<()> {
        let c = Chunk::new(TilePos::new(16, -16), 16, 16, vec![]);
        assert!(c.overlaps(&Region::new(31, -1, 40, 5)?));
        assert!(!c.overlaps(&Region::new(32, -1, 40, 5)?));
        assert!(!c.overlaps(&Region::new(16, 0, 20, 5)?));
        Ok(())
    }
}
