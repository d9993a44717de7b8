//! Identifier rules: column name truncation and the path → table name
//! heuristic.

use crate::{Error, Result};

/// Longest column name produced by [`identifier`].
pub const MAX_COLUMN_NAME_LEN: usize = 29;

/// Longest table name [`table_name`] accepts.
pub const MAX_TABLE_NAME_LEN: usize = 30;

/// Separates the levels of a flattened nested object in field names.
pub const SEPARATOR: char = '.';

/// Width of the hash token spliced into truncated identifiers.
const HASH_WIDTH: usize = 8;

/// Suffix replacing a trailing segment that names a detail of its parent.
const DETAIL_SUFFIX: &str = "dtl";

/// Abbreviations applied, in order, to the leading path segment.
const PREFIX_ABBREVIATIONS: &[(&str, &str)] = &[
    ("alliance", "alli"),
    ("calendar", "cal"),
    ("character", "chr"),
    ("corporation", "crp"),
    ("dogma", "dgm"),
    ("fleet", "flt"),
    ("incursions", "inc"),
    ("industry", "ind"),
    ("insurance", "ins"),
    ("killmail", "km"),
    ("loyalty", "loy"),
    ("market", "mkt"),
    ("opportunity", "opp"),
    ("search", "srch"),
    ("sovereignty", "sov"),
    ("universe", "uv"),
    ("contract", "ctr"),
];

/// Turns a (possibly nested) field name into a column identifier of at most
/// [`MAX_COLUMN_NAME_LEN`] characters.
///
/// Separators become `_`. Longer names keep their head and tail around a
/// hash of the whole name, so distinct long names stay distinct.
pub fn identifier(name: &str) -> String {
    let name = name.replace(SEPARATOR, "_");
    let chars: Vec<char> = name.chars().collect();

    if chars.len() <= MAX_COLUMN_NAME_LEN {
        return name;
    }

    let hash = format!(
        "{:0width$x}",
        xxhash_rust::xxh32::xxh32(name.as_bytes(), 0),
        width = HASH_WIDTH
    );

    let cut = chars.len() - MAX_COLUMN_NAME_LEN + HASH_WIDTH;
    let head = (chars.len() - cut) / 2;
    let tail = (chars.len() + cut) / 2;

    let mut ret = String::with_capacity(name.len());
    ret.extend(&chars[..head]);
    ret.push_str(&hash);
    ret.extend(&chars[tail..]);
    ret
}

/// Derives a table name from an API path.
///
/// The first segment becomes an abbreviated prefix, repeated segments are
/// dropped, and a trailing segment contained in its parent collapses into a
/// `dtl` suffix:
///
/// ```text
/// /characters/{character_id}/assets/      →  chr_asset
/// /markets/prices/                        →  mkt_price
/// /universe/types/{type_id}/              →  uv_type_dtl
/// ```
///
/// Fails rather than truncating when the result exceeds
/// [`MAX_TABLE_NAME_LEN`].
pub fn table_name(path: &str) -> Result<String> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let mut name = String::new();

    for (i, segment) in segments.iter().enumerate() {
        let word = normalize_segment(segment);

        if segments.len() == 1 {
            name.push_str(&word);
        } else if i == 0 {
            name.push_str(&abbreviate(&word));
            name.push('_');
        } else if i == segments.len() - 1 {
            if segments[i - 1].contains(word.as_str()) {
                name.push_str(DETAIL_SUFFIX);
            } else {
                name.push_str(&word);
            }
        } else if !segments[i - 1].contains(word.as_str()) {
            name.push_str(&word);
            name.push('_');
        }
    }

    if name.chars().count() > MAX_TABLE_NAME_LEN {
        return Err(Error::table_name_too_long(name));
    }

    Ok(name)
}

/// Strips parameter braces and `_id`, then singularizes.
fn normalize_segment(segment: &str) -> String {
    let mut word = segment
        .replace(['{', '}'], "")
        .replace("_id", "")
        .replace("division", "div");

    if let Some(stem) = word.strip_suffix("ies") {
        word = format!("{stem}y");
    }

    if !word.ends_with("us") {
        if let Some(stem) = word.strip_suffix('s') {
            word = stem.to_string();
        }
    }

    word
}

fn abbreviate(word: &str) -> String {
    PREFIX_ABBREVIATIONS
        .iter()
        .fold(word.to_string(), |word, (long, short)| word.replace(long, short))
}
