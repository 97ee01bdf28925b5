//! Nerd Fonts glyph records and the pure operations over them.
//!
//! ## Components
//!
//! - [`record`] — the [`GlyphRecord`] wire type and glyph-name parsing
//! - [`copy`] — derives the copyable text forms of a glyph (character, hex
//!   code, font name, escaped string literal)
//! - [`lookup`] — case-insensitive substring lookup over a record corpus

pub mod copy;
pub mod lookup;
pub mod record;

pub use copy::{CopyFormat, CopyTexts, decode_literal, derive_copy_texts, parse_codepoint, unicode_literal};
pub use lookup::{EmptyQueryPolicy, LookupOptions, lookup, lookup_with};
pub use record::{GlyphRecord, SearchResults, parse_glyph_name};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during glyph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GlyphError {
    #[error("invalid code point \"{code_point}\" for glyph {font_name}")]
    #[diagnostic(
        code(nerd::glyph::invalid_code_point),
        help(
            "The code point must be a hexadecimal number naming a Unicode scalar value \
             (0 to 10FFFF, excluding the surrogate range D800 to DFFF)."
        )
    )]
    InvalidCodePoint {
        font_name: String,
        code_point: String,
    },

    #[error("malformed glyph name: \"{name}\"")]
    #[diagnostic(
        code(nerd::glyph::malformed_name),
        help("Glyph names have the form <series>-<group>-<description>, e.g. nf-md-cat.")
    )]
    MalformedName { name: String },

    #[error("malformed string literal at offset {offset}: {message}")]
    #[diagnostic(
        code(nerd::glyph::malformed_literal),
        help("Escapes must be written as \\u followed by exactly four hex digits.")
    )]
    MalformedLiteral { offset: usize, message: String },

    #[error("unknown glyph: \"{font_name}\"")]
    #[diagnostic(
        code(nerd::glyph::unknown),
        help("Use `nerd-search search <query>` to find the exact font name.")
    )]
    UnknownGlyph { font_name: String },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = Result<T, GlyphError>;
