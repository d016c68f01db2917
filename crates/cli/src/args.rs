//! Command line arguments.
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use tmx_document::DEFAULT_TILE_SIZE;
use tmx_tilemap::{Region, RegionError, RegionShift};

/// Move a rectangle of tiles, and the objects on it, up or down in an infinite Tiled map.
///
/// The map is edited in place after a copy of it is saved alongside with a `.bak` suffix.  Only chunked (infinite) tile
/// layers and object groups are touched.
#[derive(Debug, Parser)]
#[command(
    name = "tmx_shift",
    version,
    after_help = "Example:\n  tmx_shift Tilemaps/dungeon.tmx 184 2 215 17 -3\n  \
                  Shifts the tiles in region (184,2)-(215,17) up by 3 tiles.\n\n\
                  Negative shifts move content up, positive shifts move it down."
)]
pub struct Args {
    /// The .tmx file to edit.
    pub file: Utf8PathBuf,

    /// Left column of the region, in tiles.
    #[arg(allow_negative_numbers = true)]
    pub x1: i32,

    /// Top row of the region, in tiles.
    #[arg(allow_negative_numbers = true)]
    pub y1: i32,

    /// Right column of the region, inclusive.
    #[arg(allow_negative_numbers = true)]
    pub x2: i32,

    /// Bottom row of the region, inclusive.
    #[arg(allow_negative_numbers = true)]
    pub y2: i32,

    /// Tiles to move the region by.
    #[arg(allow_negative_numbers = true)]
    pub shift_y: i32,

    /// Size of a tile in pixels, used to find and move objects.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub tile_size: u32,

    /// Log more.  Repeat for debug output.  `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn region_shift(&self) -> Result<RegionShift, RegionError> {
        let region = Region::new(
            self.x1.into(),
            self.y1.into(),
            self.x2.into(),
            self.y2.into(),
        )?;
        Ok(RegionShift::new(region, self.shift_y.into()))
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// The shift in pixels, for display.
    pub fn shift_pixels(&self) -> i64 {
        i64::from(self.shift_y) * i64::from(self.tile_size)
    }
}
