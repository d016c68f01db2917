//! Reading `name="value"` pairs out of a start tag.
use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"\s([A-Za-z_][\w:.-]*)\s*=\s*"([^"]*)""#).expect("Attribute regex should compile");
}

pub(crate) struct Attribute<'a> {
    pub(crate) value: &'a str,
    /// Byte range of the value within the tag, excluding the quotes.
    pub(crate) value_span: Range<usize>,
}

/// Find the first attribute of the given name in a start tag.
pub(crate) fn find_attribute<'a>(tag: &'a str, name: &str) -> Option<Attribute<'a>> {
    ATTRIBUTE
        .captures_iter(tag)
        .filter(|c| c.get(1).map(|n| n.as_str()) == Some(name))
        .find_map(|c| {
            let value = c.get(2)?;
            Some(Attribute {
                value: value.as_str(),
                value_span: value.range(),
            })
        })
}
