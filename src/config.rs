//! Search configuration, persisted as TOML in `$XDG_CONFIG_HOME/nerd-search/config.toml`.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::glyph::{EmptyQueryPolicy, LookupOptions};
use crate::paths::NerdPaths;

/// Errors from configuration handling.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(nerd::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(nerd::config::parse),
        help("Check the TOML syntax in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(nerd::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid port \"{value}\"")]
    #[diagnostic(
        code(nerd::config::invalid_port),
        help("NERD_SEARCH_PORT must be a number between 0 and 65535.")
    )]
    InvalidPort { value: String },

    #[error("remote search not possible: {message}")]
    #[diagnostic(
        code(nerd::config::remote_search),
        help("The search service applies max_results and max_query_len; drop --remote to search locally.")
    )]
    RemoteSearch { message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings shared by the CLI and the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Title reported by the service.
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Address the service binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS origins; `"*"` allows any.
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,
    /// Results returned when a request does not ask for a count.
    #[serde(default = "default_results")]
    pub default_results: usize,
    /// Upper bound on the requested result count.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Longest accepted query, in characters.
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
    #[serde(default)]
    pub empty_query: EmptyQueryPolicy,
    /// Glyph catalog file; the bundled sample is used when unset and no
    /// catalog exists in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Base URL of a remote search service used by the CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

fn default_app_title() -> String {
    "Nerd Iconic Font Search".into()
}
fn default_bind() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8000
}
fn default_allow_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}
fn default_results() -> usize {
    30
}
fn default_max_results() -> usize {
    100
}
fn default_max_query_len() -> usize {
    50
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            bind: default_bind(),
            port: default_port(),
            allow_origins: default_allow_origins(),
            default_results: default_results(),
            max_results: default_max_results(),
            max_query_len: default_max_query_len(),
            empty_query: EmptyQueryPolicy::default(),
            catalog: None,
            remote: None,
        }
    }
}

impl SearchConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load the config from the XDG location.
    pub fn from_paths(paths: &NerdPaths) -> ConfigResult<Self> {
        Self::load_or_default(&paths.config_file())
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Apply `NERD_SEARCH_BIND` / `NERD_SEARCH_PORT`.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(
            std::env::var("NERD_SEARCH_BIND").ok(),
            std::env::var("NERD_SEARCH_PORT").ok(),
        )
    }

    fn apply_overrides(&mut self, bind: Option<String>, port: Option<String>) -> ConfigResult<()> {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: port })?;
        }
        Ok(())
    }

    /// `bind:port` for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Lookup options for a request asking for `limit` results.
    pub fn lookup_options(&self, limit: usize) -> LookupOptions {
        LookupOptions {
            empty_query: self.empty_query,
            limit: Some(limit),
        }
    }

    /// Reject a CLI search the remote service would refuse or could not
    /// honour: an empty query with `list_all` (the service applies its own
    /// empty-query policy), a count outside `1..=max_results`, or an
    /// overlong query.
    pub fn check_remote_search(&self, query: &str, limit: usize, list_all: bool) -> ConfigResult<()> {
        let message = if list_all && query.is_empty() {
            "--all lists the local catalog only".to_string()
        } else if limit == 0 || limit > self.max_results {
            format!("--limit must be between 1 and {}, got {limit}", self.max_results)
        } else if query.chars().count() > self.max_query_len {
            format!("query must be at most {} characters", self.max_query_len)
        } else {
            return Ok(());
        };
        Err(ConfigError::RemoteSearch { message })
    }

    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == "*")
    }
}
