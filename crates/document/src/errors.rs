/// Why a `<chunk>` element was skipped.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ChunkElementError {
    #[error("Chunk is missing the {} attribute", _0)]
    MissingAttribute(&'static str),

    #[error("Chunk attribute {name}={value:?} is not an integer")]
    BadAttribute { name: &'static str, value: String },

    #[error("{}", _0)]
    Cells(#[from] tmx_tilemap::ChunkError),
}
