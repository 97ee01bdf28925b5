//! Blocking client for a remote glyph search service.
//!
//! The service exposes `GET /api/search?q=<query>&num_results=<n>` and
//! answers `{ "results": [GlyphRecord, ...] }`. Decoded records are handed
//! to the same copy-text derivation as local ones.

use std::time::Duration;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::glyph::{GlyphRecord, SearchResults, parse_glyph_name};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, Diagnostic)]
pub enum ClientError {
    #[error("remote request failed: {message}")]
    #[diagnostic(
        code(nerd::client::request),
        help("Is the search service running at the configured --remote URL?")
    )]
    Request { message: String },

    #[error("unexpected response from server: {message}")]
    #[diagnostic(code(nerd::client::response), help("Server version mismatch?"))]
    Response { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// `GET /health` body.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub glyphs: usize,
}

/// HTTP client for the search service.
pub struct SearchClient {
    base_url: String,
    http: ureq::Agent,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Search remotely for up to `num_results` glyphs.
    pub fn search(&self, query: &str, num_results: usize) -> ClientResult<Vec<GlyphRecord>> {
        let url = self.endpoint("/api/search");
        tracing::debug!(%url, query, num_results, "remote glyph search");
        let resp = self
            .http
            .get(&url)
            .query("q", query)
            .query("num_results", &num_results.to_string())
            .call()
            .map_err(request_error)?;
        let body: SearchResults = resp.into_json().map_err(|e| ClientError::Response {
            message: format!("failed to parse JSON: {e}"),
        })?;
        Ok(body.results)
    }

    /// Fetch one glyph by exact font name.
    ///
    /// The service only does substring search, so this searches for the name
    /// (or, for names longer than `max_query_len`, a prefix of their
    /// description) and picks the exact match. `Ok(None)` when the name is
    /// unknown or malformed.
    pub fn find(
        &self,
        font_name: &str,
        max_query_len: usize,
        max_results: usize,
    ) -> ClientResult<Option<GlyphRecord>> {
        let Some(query) = find_query(font_name, max_query_len) else {
            return Ok(None);
        };
        Ok(self
            .search(&query, max_results)?
            .into_iter()
            .find(|r| r.font_name == font_name))
    }

    /// Check that the service is up.
    pub fn health(&self) -> ClientResult<HealthStatus> {
        let resp = self
            .http
            .get(&self.endpoint("/health"))
            .call()
            .map_err(request_error)?;
        resp.into_json().map_err(|e| ClientError::Response {
            message: format!("failed to parse JSON: {e}"),
        })
    }
}

/// Query that will return `font_name` from a substring search capped at
/// `max_len` characters.
fn find_query(font_name: &str, max_len: usize) -> Option<String> {
    if font_name.chars().count() <= max_len {
        return Some(font_name.to_string());
    }
    let (_, _, description) = parse_glyph_name(font_name).ok()?;
    Some(description.chars().take(max_len).collect())
}

fn request_error(e: ureq::Error) -> ClientError {
    match e {
        ureq::Error::Status(code, resp) => {
            let detail = resp.into_string().unwrap_or_default();
            ClientError::Request {
                message: format!("server returned {code}: {detail}"),
            }
        }
        ureq::Error::Transport(t) => ClientError::Request {
            message: t.to_string(),
        },
    }
}
