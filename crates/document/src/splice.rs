//! Locating layers and object groups in document text and splicing their rewritten contents back in.
use std::borrow::Cow;

use lazy_static::lazy_static;
use log::*;
use regex::{Captures, Regex};

use tmx_tilemap::{Chunk, RegionShift, TilePos};

use crate::attributes::find_attribute;
use crate::errors::*;
use crate::object::relocate;

// Start tags must not be self-closing, or the lazy body would run on into the next element of the same kind.
lazy_static! {
    static ref LAYER: Regex = Regex::new(r"(?s)(<layer(?:\s[^>]*[^/>])?>)(.*?)(</layer>)")
        .expect("Layer regex should compile");
    static ref OBJECT_GROUP: Regex =
        Regex::new(r"(?s)(<objectgroup(?:\s[^>]*[^/>])?>)(.*?)(</objectgroup>)")
            .expect("Object group regex should compile");
    static ref CHUNK: Regex = Regex::new(r"(?s)(<chunk(?:\s[^>]*[^/>])?>)(.*?)</chunk>")
        .expect("Chunk regex should compile");
    static ref OBJECT: Regex = Regex::new(r"<object\s[^>]*>").expect("Object regex should compile");
}

/// Counts of what a document shift touched.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ShiftSummary {
    pub tile_layers: usize,
    /// Chunks whose grid changed and were re-serialized.
    pub chunks_rewritten: usize,
    /// Chunks skipped because they couldn't be read.
    pub malformed_chunks: usize,
    pub tiles_moved: usize,
    /// Tiles cleared from the source whose destination isn't covered by any chunk of their layer.
    pub tiles_dropped: usize,
    pub object_groups: usize,
    pub objects_moved: usize,
}

#[derive(Debug)]
pub struct ShiftedDocument {
    pub text: String,
    pub summary: ShiftSummary,
}

fn parse_int<T: std::str::FromStr>(
    tag: &str,
    name: &'static str,
) -> Result<T, ChunkElementError> {
    let attr = find_attribute(tag, name).ok_or(ChunkElementError::MissingAttribute(name))?;
    attr.value
        .trim()
        .parse()
        .map_err(|_| ChunkElementError::BadAttribute {
            name,
            value: attr.value.to_string(),
        })
}

/// Build a chunk from its start tag and CSV body.
fn parse_chunk(start_tag: &str, body: &str) -> Result<Chunk, ChunkElementError> {
    let x = parse_int(start_tag, "x")?;
    let y = parse_int(start_tag, "y")?;
    let width = parse_int(start_tag, "width")?;
    let height = parse_int(start_tag, "height")?;
    Ok(Chunk::from_csv(TilePos::new(x, y), width, height, body)?)
}

/// Shift the chunks found in the body of one `<layer>`.
fn shift_layer_body<'a>(
    body: &'a str,
    shift: &RegionShift,
    summary: &mut ShiftSummary,
) -> Cow<'a, str> {
    // One slot per chunk element in document order; `None` for the ones we couldn't read.
    let mut slots: Vec<Option<usize>> = vec![];
    let mut chunks = vec![];

    for caps in CHUNK.captures_iter(body) {
        match parse_chunk(&caps[1], &caps[2]) {
            Ok(chunk) => {
                slots.push(Some(chunks.len()));
                chunks.push(chunk);
            }
            Err(e) => {
                warn!("Leaving chunk {} unmodified: {}", &caps[1], e);
                summary.malformed_chunks += 1;
                slots.push(None);
            }
        }
    }

    let stats = shift.apply(&mut chunks);
    summary.tiles_moved += stats.delivered;
    summary.tiles_dropped += stats.dropped;

    let mut slots = slots.into_iter();
    CHUNK.replace_all(body, |caps: &Captures| {
        match slots.next().flatten().map(|i| &chunks[i]) {
            Some(chunk) if chunk.is_dirty() => {
                summary.chunks_rewritten += 1;
                format!("{}\n{}\n</chunk>", &caps[1], chunk.to_csv())
            }
            _ => caps[0].to_string(),
        }
    })
}

/// Shift the tiles of every chunked tile layer, then every object in every object group, returning the new text.
///
/// Text outside of chunk and object elements is never modified, nor is any chunk whose contents end up the same, so
/// shifting a region of empty tiles gives back the input byte for byte.
pub fn shift_document(text: &str, shift: &RegionShift, tile_size: u32) -> ShiftedDocument {
    let mut summary = ShiftSummary::default();

    let layered = LAYER.replace_all(text, |caps: &Captures| {
        summary.tile_layers += 1;
        let body = shift_layer_body(&caps[2], shift, &mut summary);
        format!("{}{}{}", &caps[1], body, &caps[3])
    });

    let shifted = OBJECT_GROUP.replace_all(&layered, |caps: &Captures| {
        summary.object_groups += 1;
        let body = OBJECT.replace_all(&caps[2], |o: &Captures| {
            let moved = relocate(&o[0], shift, tile_size);
            if let Cow::Owned(_) = moved {
                summary.objects_moved += 1;
            }
            moved.into_owned()
        });
        format!("{}{}{}", &caps[1], body, &caps[3])
    });

    debug!("Document shift by {}: {:?}", shift.get_offset(), summary);
    if summary.tiles_dropped > 0 {
        warn!(
            "{} tiles were cleared but not written: no chunk exists at their destination",
            summary.tiles_dropped
        );
    }

    ShiftedDocument {
        text: shifted.into_owned(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use tmx_tilemap::Region;

    fn read_asset(name: &str) -> String {
        let path = format!("{}/test_assets/{}", env!("CARGO_MANIFEST_DIR"), name);
        std::fs::read_to_string(path).expect("Could not read test asset")
    }

    fn shift(x1: i64, y1: i64, x2: i64, y2: i64, offset: i64) -> RegionShift {
        RegionShift::new(Region::new(x1, y1, x2, y2).unwrap(), offset)
    }

    #[test]
    fn test_dungeon() {
        let input = read_asset("dungeon.tmx");
        let expected = read_asset("dungeon_shifted.tmx");

        let out = shift_document(&input, &shift(1, 1, 2, 2, -4), 16);
        assert_eq!(out.text, expected);
        assert_eq!(
            out.summary,
            ShiftSummary {
                tile_layers: 2,
                chunks_rewritten: 3,
                malformed_chunks: 0,
                tiles_moved: 4,
                tiles_dropped: 1,
                object_groups: 1,
                objects_moved: 2,
            }
        );
    }

    #[test]
    fn test_empty_region_is_identity() {
        let input = read_asset("dungeon.tmx");
        // Column 0 of chunk (4,0) holds tiles, but columns 5-6 of rows 1-2 are empty.
        let out = shift_document(&input, &shift(5, 1, 6, 2, 1), 16);
        assert_eq!(out.text, input);
        assert_eq!(out.summary.chunks_rewritten, 0);
    }

    #[test]
    fn test_malformed_chunks_are_kept() {
        let input = "<map>\n <layer id=\"1\" name=\"a\" width=\"4\" height=\"2\">\n  <data encoding=\"csv\">\n\
<chunk x=\"0\" y=\"0\" width=\"2\">\n1,2,\n3,4\n</chunk>\n\
<chunk x=\"0\" y=\"2\" width=\"2\" height=\"2\">\n1,oops,\n3,4\n</chunk>\n\
<chunk height=\"2\" width=\"2\" y=\"-2\" x=\"0\">\n0,0,\n0,0\n</chunk>\n\
<chunk x=\"0\" y=\"-4\" width=\"2\" height=\"2\"/>\n\
  </data>\n </layer>\n</map>\n";

        let out = shift_document(input, &shift(0, 0, 1, 3, -2), 16);
        // The one readable chunk, with its attributes out of the usual order, covers the destination but receives
        // nothing because both source chunks are unreadable.  The self-closing chunk is never matched.
        assert_eq!(out.text, input);
        assert_eq!(out.summary.malformed_chunks, 2);
        assert_eq!(out.summary.chunks_rewritten, 0);
    }

    #[test]
    fn test_rewrite_keeps_start_tag() {
        let input = "<layer id=\"2\" name=\"b\">\n<data encoding=\"csv\">\n\
<chunk height=\"2\" width=\"2\" y=\"-2\" x=\"-2\">\n5,0,\n0,0\n</chunk>\n\
</data>\n</layer>\n<imagelayer id=\"3\" name=\"sky\">\n<image source=\"sky.png\"/>\n</imagelayer>\n";
        let expected = "<layer id=\"2\" name=\"b\">\n<data encoding=\"csv\">\n\
<chunk height=\"2\" width=\"2\" y=\"-2\" x=\"-2\">\n0,0,\n5,0\n</chunk>\n\
</data>\n</layer>\n<imagelayer id=\"3\" name=\"sky\">\n<image source=\"sky.png\"/>\n</imagelayer>\n";

        let out = shift_document(input, &shift(-2, -2, -2, -2, 1), 16);
        assert_eq!(out.text, expected);
        assert_eq!(out.summary.tile_layers, 1);
    }

    #[test]
    fn test_self_closing_sections() {
        let input = "<layer id=\"1\" name=\"empty\"/>\n<objectgroup id=\"2\"/>\n\
<objectgroup id=\"3\">\n<object id=\"1\" x=\"0\" y=\"0\"/>\n</objectgroup>\n";
        let out = shift_document(input, &shift(0, 0, 0, 0, 3), 16);
        assert_eq!(
            out.text,
            input.replace("<object id=\"1\" x=\"0\" y=\"0\"/>", "<object id=\"1\" x=\"0\" y=\"48\"/>")
        );
        assert_eq!(out.summary.tile_layers, 0);
        assert_eq!(out.summary.object_groups, 1);
        assert_eq!(out.summary.objects_moved, 1);
    }
}
