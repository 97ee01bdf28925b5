//! The glyph record exchanged between catalog, search service and UI.

use serde::{Deserialize, Serialize};

use super::{GlyphError, GlyphResult};

/// One searchable icon entry.
///
/// Records are plain values: nothing is validated on construction, so a
/// search response carrying one bad code point still decodes. Validation
/// happens when copy texts are derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Identifier such as `nf-md-cat`, also the CSS class of the glyph face.
    pub font_name: String,
    /// Series prefix, `nf` for every Nerd Fonts glyph.
    pub series: String,
    /// Icon set the glyph belongs to (`md`, `cod`, `fa`, ...).
    pub group: String,
    /// Code point as a hexadecimal string, e.g. `f011b`.
    pub unicode: String,
    /// Human-readable label, e.g. `cat`.
    pub description: String,
}

impl GlyphRecord {
    /// Build a record from a catalog entry (`nf-md-cat` → `f011b`).
    pub fn from_name(font_name: &str, unicode: &str) -> GlyphResult<Self> {
        let (series, group, description) = parse_glyph_name(font_name)?;
        Ok(Self {
            font_name: font_name.to_string(),
            series,
            group,
            unicode: unicode.to_string(),
            description,
        })
    }
}

/// Body of a `search` endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<GlyphRecord>,
}

/// Split a glyph name into `(series, group, description)`.
///
/// `nf-cod-arrow_small_left` becomes `("nf", "cod", "arrow small left")`.
/// Only the first two dashes separate fields; underscores in the
/// description turn into spaces.
pub fn parse_glyph_name(name: &str) -> GlyphResult<(String, String, String)> {
    let mut parts = name.splitn(3, '-');
    let (Some(series), Some(group), Some(raw)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GlyphError::MalformedName { name: name.into() });
    };
    if series.is_empty() || group.is_empty() || raw.is_empty() {
        return Err(GlyphError::MalformedName { name: name.into() });
    }
    Ok((series.to_string(), group.to_string(), raw.replace('_', " ")))
}
