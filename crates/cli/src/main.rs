mod args;
mod map_file;

use anyhow::{Context, Result};
use clap::Parser;

use args::Args;
use map_file::MapFile;

/// Back up the map, shift it, and write it back over the original.
fn run(args: &Args) -> Result<()> {
    let shift = args.region_shift()?;
    let map = MapFile::open(args.file.clone())?;

    println!("TMX Region Shift");
    println!("  File: {}", map.path());
    let region = shift.get_source();
    println!(
        "  Region: {} ({}x{} tiles)",
        region,
        region.get_width(),
        region.get_height()
    );
    println!(
        "  Shift Y: {} tiles ({} pixels)",
        shift.get_offset(),
        args.shift_pixels()
    );
    println!();

    let backup = map.backup().context("Could not create the backup")?;
    println!("  Backup created: {}", backup);

    let text = map.read()?;
    let shifted = tmx_document::shift_document(&text, &shift, args.tile_size);

    // Past this point the backup is the only copy of the original if anything goes wrong.
    map.write(&shifted.text).with_context(|| {
        format!(
            "Could not write {}; the original is preserved in {}",
            map.path(),
            backup
        )
    })?;
    println!("  Modified: {}", map.path());

    let summary = &shifted.summary;
    println!(
        "  Tiles moved: {} across {} layers ({} chunks rewritten)",
        summary.tiles_moved, summary.tile_layers, summary.chunks_rewritten
    );
    println!("  Objects moved: {}", summary.objects_moved);
    if summary.tiles_dropped > 0 {
        println!(
            "  Tiles lost: {} (no chunk exists at their destination)",
            summary.tiles_dropped
        );
    }
    if summary.malformed_chunks > 0 {
        println!("  Chunks skipped as malformed: {}", summary.malformed_chunks);
    }
    println!();
    println!("Done! Open the TMX in Tiled to verify, then re-export.");

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    tmx_logging::log_to_stderr(args.log_level());
    run(&args)
}
