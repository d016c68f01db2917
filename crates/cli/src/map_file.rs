//! The map file being edited, and its backup.
use camino::{Utf8Path, Utf8PathBuf};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MapFileError {
    #[error("File not found: {}", _0)]
    NotFound(Utf8PathBuf),

    #[error("{} is not a file", _0)]
    NotAFile(Utf8PathBuf),

    #[error("{path} is not valid UTF-8")]
    NotUtf8 {
        path: Utf8PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("I/O error: {}", _0)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = MapFileError> = std::result::Result<T, E>;

/// A map file on disk, checked to exist when opened.
#[derive(Debug)]
pub struct MapFile {
    path: Utf8PathBuf,
}

impl MapFile {
    pub fn open(path: Utf8PathBuf) -> Result<MapFile> {
        if !path.try_exists()? {
            return Err(MapFileError::NotFound(path));
        }

        if !path.metadata()?.is_file() {
            return Err(MapFileError::NotAFile(path));
        }

        Ok(MapFile { path })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The backup lives next to the map, with `.bak` appended to the full name: `dungeon.tmx.bak`.
    pub fn backup_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.bak", self.path))
    }

    /// Copy the map byte for byte to the backup path, replacing any previous backup.
    pub fn backup(&self) -> Result<Utf8PathBuf> {
        let dest = self.backup_path();
        std::fs::copy(&self.path, &dest)?;
        log::info!("Backed up {} to {}", self.path, dest);
        Ok(dest)
    }

    pub fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path)?;
        String::from_utf8(bytes).map_err(|source| MapFileError::NotUtf8 {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the contents of the map.
    pub fn write(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
