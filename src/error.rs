//! Rich diagnostic error types for nerd-search.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives; [`NerdError`] gathers them for callers that cross subsystems.

use miette::Diagnostic;
use thiserror::Error;

pub use crate::catalog::CatalogError;
pub use crate::client::ClientError;
pub use crate::config::ConfigError;
pub use crate::glyph::GlyphError;
pub use crate::paths::PathError;

/// Top-level error type.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum NerdError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Paths(#[from] PathError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ClientError),
}

pub type NerdResult<T> = std::result::Result<T, NerdError>;
