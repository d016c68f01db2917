//! Moving point objects along with the tiles under them.
use std::borrow::Cow;
use std::ops::Range;

use tmx_tilemap::RegionShift;

use crate::attributes::find_attribute;

/// The pixel position of an `<object>`, as written in its start tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAnchor {
    pub x: f64,
    pub y: f64,
    y_span: Range<usize>,
}

impl ObjectAnchor {
    /// Read the anchor from an object's start tag.  Returns `None` if either coordinate is missing or unparseable.
    pub fn from_tag(tag: &str) -> Option<ObjectAnchor> {
        let x = find_attribute(tag, "x")?;
        let y = find_attribute(tag, "y")?;
        Some(ObjectAnchor {
            x: x.value.trim().parse().ok()?,
            y: y.value.trim().parse().ok()?,
            y_span: y.value_span,
        })
    }
}

/// Relocate one object start tag.
///
/// Only the anchor point is tested against the region, so an object hanging out of the region still moves if its
/// anchor is inside.  On a move, the `y` value is the only part of the tag that changes; everything else, including
/// attribute order and quoting, comes through untouched.  A borrowed result means the object stayed put.
pub fn relocate<'a>(tag: &'a str, shift: &RegionShift, tile_size: u32) -> Cow<'a, str> {
    let Some(anchor) = ObjectAnchor::from_tag(tag) else {
        return Cow::Borrowed(tag);
    };

    if !shift
        .get_source()
        .pixel_bounds(tile_size)
        .contains(anchor.x, anchor.y)
    {
        return Cow::Borrowed(tag);
    }

    let new_y = anchor.y + (shift.get_offset() * i64::from(tile_size)) as f64;
    let mut out = String::with_capacity(tag.len() + 8);
    out.push_str(&tag[..anchor.y_span.start]);
    out.push_str(&new_y.to_string());
    out.push_str(&tag[anchor.y_span.end..]);
    Cow::Owned(out)
}
