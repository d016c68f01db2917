#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegionError {
    #[error("Region corners are inverted: ({x1}, {y1}) must not be right of or below ({x2}, {y2})")]
    Inverted { x1: i64, y1: i64, x2: i64, y2: i64 },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ChunkError {
    #[error("Cell {cell:?} at row {row}, column {column} is not a tile index")]
    BadCell {
        row: usize,
        column: usize,
        cell: String,
    },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Region error: {}", _0)]
    Region(#[from] RegionError),

    #[error("Chunk error: {}", _0)]
    Chunk(#[from] ChunkError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
