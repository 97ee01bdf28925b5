// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # nerd-search
//!
//! Search Nerd Fonts icon glyphs and derive the texts a user copies for them.
//!
//! ## Architecture
//!
//! - **Glyphs** (`glyph`): the record type, copy-text derivation (character,
//!   hex code, font name, `\uXXXX` literal) and substring lookup
//! - **Catalog** (`catalog`): the searchable corpus, bundled or loaded from JSON
//! - **Config** (`config`, `paths`): TOML settings under XDG directories
//! - **Client** (`client`): blocking client for a remote search service
//! - **Server** (`server`, feature `server`): the `/api/search` HTTP service
//!
//! ## Library usage
//!
//! ```
//! use nerd_search::catalog::GlyphCatalog;
//! use nerd_search::glyph::{LookupOptions, derive_copy_texts};
//!
//! let catalog = GlyphCatalog::bundled();
//! let hits = catalog.search("cat", &LookupOptions::default());
//! let texts = derive_copy_texts(&hits[0]).unwrap();
//! assert_eq!(texts.font_name, hits[0].font_name);
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod glyph;
pub mod paths;
#[cfg(feature = "server")]
pub mod server;
