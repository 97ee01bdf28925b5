//! Copyable text forms of a glyph.
//!
//! A user picking a glyph can copy it as the character itself, its hex
//! code, its font name, or an escaped string literal suitable for pasting
//! into source code. The literal escapes every UTF-16 code unit above 128
//! on its own, so glyphs outside the Basic Multilingual Plane come out as
//! two `\uXXXX` sequences (`U+F011B` becomes `\uDB80\uDD1B`).

use std::fmt;
use std::str::FromStr;

use super::{GlyphError, GlyphRecord, GlyphResult};

/// The four representations offered for copying, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyFormat {
    /// The glyph character.
    Character,
    /// The raw hex code point string.
    HexCode,
    /// The font name, e.g. `nf-md-cat`.
    FontName,
    /// The escaped string literal.
    Literal,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 4] = [
        CopyFormat::Character,
        CopyFormat::HexCode,
        CopyFormat::FontName,
        CopyFormat::Literal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "char",
            Self::HexCode => "hex",
            Self::FontName => "name",
            Self::Literal => "literal",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::HexCode => "hex code",
            Self::FontName => "font name",
            Self::Literal => "string literal",
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "character" | "glyph" => Ok(Self::Character),
            "hex" | "hex-code" | "unicode" => Ok(Self::HexCode),
            "name" | "font-name" => Ok(Self::FontName),
            "literal" | "escaped" => Ok(Self::Literal),
            other => Err(format!(
                "unknown copy format \"{other}\" (expected char, hex, name or literal)"
            )),
        }
    }
}

/// The copy texts of one glyph, in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTexts {
    pub character: String,
    pub hex_code: String,
    pub font_name: String,
    pub literal: String,
}

impl CopyTexts {
    /// The four texts as an ordered sequence.
    pub fn as_array(&self) -> [&str; 4] {
        [
            &self.character,
            &self.hex_code,
            &self.font_name,
            &self.literal,
        ]
    }

    pub fn get(&self, format: CopyFormat) -> &str {
        match format {
            CopyFormat::Character => &self.character,
            CopyFormat::HexCode => &self.hex_code,
            CopyFormat::FontName => &self.font_name,
            CopyFormat::Literal => &self.literal,
        }
    }

    /// Iterate `(format, text)` pairs in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (CopyFormat, &str)> {
        CopyFormat::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Derive the copy texts for a record.
///
/// Fails with [`GlyphError::InvalidCodePoint`] when `record.unicode` does
/// not name a Unicode scalar value.
pub fn derive_copy_texts(record: &GlyphRecord) -> GlyphResult<CopyTexts> {
    let ch = parse_codepoint(&record.unicode).map_err(|_| GlyphError::InvalidCodePoint {
        font_name: record.font_name.clone(),
        code_point: record.unicode.clone(),
    })?;
    let character = ch.to_string();
    let literal = unicode_literal(&character);
    Ok(CopyTexts {
        character,
        hex_code: record.unicode.clone(),
        font_name: record.font_name.clone(),
        literal,
    })
}

/// Parse a hexadecimal code point into a `char`.
///
/// Only hex digits are accepted: no sign, no `0x` or `U+` prefix.
pub fn parse_codepoint(hex: &str) -> GlyphResult<char> {
    let invalid = || GlyphError::InvalidCodePoint {
        font_name: String::new(),
        code_point: hex.to_string(),
    };
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    char::from_u32(value).ok_or_else(invalid)
}

/// Escape every UTF-16 code unit above 128 as `\uXXXX` (uppercase hex).
///
/// Units up to and including 128 are copied through unchanged. Surrogate
/// pairs are not combined.
pub fn unicode_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        if unit > 128 {
            out.push_str(&format!("\\u{unit:04X}"));
        } else {
            // Units <= 128 are never surrogates.
            out.push(char::from(unit as u8));
        }
    }
    out
}

/// Reverse [`unicode_literal`]: turn `\uXXXX` escapes back into code units.
///
/// A backslash not followed by `u` is kept literally. Fails on a truncated
/// escape, non-hex digits, or code units that do not form valid UTF-16.
pub fn decode_literal(literal: &str) -> GlyphResult<String> {
    let mut units: Vec<u16> = Vec::with_capacity(literal.len());
    let mut rest = literal;
    let mut offset = 0;

    while let Some(ch) = rest.chars().next() {
        if rest.starts_with("\\u") {
            let digits = rest.get(2..6).ok_or_else(|| GlyphError::MalformedLiteral {
                offset,
                message: "truncated \\u escape".into(),
            })?;
            if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(GlyphError::MalformedLiteral {
                    offset,
                    message: format!("invalid hex digits \"{digits}\""),
                });
            }
            let unit = u16::from_str_radix(digits, 16).map_err(|e| GlyphError::MalformedLiteral {
                offset,
                message: e.to_string(),
            })?;
            units.push(unit);
            rest = &rest[6..];
            offset += 6;
        } else {
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            rest = &rest[ch.len_utf8()..];
            offset += ch.len_utf8();
        }
    }

    String::from_utf16(&units).map_err(|e| GlyphError::MalformedLiteral {
        offset: literal.len(),
        message: e.to_string(),
    })
}
