//! XDG-compliant path resolution for nerd-search.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from path resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(nerd::paths::no_home),
        help("Set the HOME environment variable or pass --config explicitly.")
    )]
    NoHome,
}

pub type PathResult<T> = std::result::Result<T, PathError>;

/// Global XDG directories for nerd-search.
#[derive(Debug, Clone)]
pub struct NerdPaths {
    /// `$XDG_CONFIG_HOME/nerd-search/`
    pub config_dir: PathBuf,
    /// `$XDG_DATA_HOME/nerd-search/`
    pub data_dir: PathBuf,
}

impl NerdPaths {
    /// Resolve XDG directories from environment variables with standard fallbacks.
    pub fn resolve() -> PathResult<Self> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| PathError::NoHome)?;

        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config"))
            .join("nerd-search");

        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".local/share"))
            .join("nerd-search");

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Path to the config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Default location of a user-supplied glyph catalog.
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("glyphs.json")
    }
}
