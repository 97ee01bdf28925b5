//! HTTP search service.
//!
//! - `GET /api/search?q=<text>&num_results=<n>` — glyph search
//! - `GET /api` — service info
//! - `GET /health` — server status
//!
//! Build and run: `cargo run --features server --bin nerd-searchd`

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::GlyphCatalog;
use crate::config::SearchConfig;
use crate::glyph::SearchResults;

/// Shared, read-only service state.
pub struct ServerState {
    pub config: SearchConfig,
    pub catalog: GlyphCatalog,
}

impl ServerState {
    pub fn new(config: SearchConfig, catalog: GlyphCatalog) -> Self {
        Self { config, catalog }
    }

    /// Run a validated search against the catalog.
    pub fn search(&self, params: &SearchParams) -> Result<SearchResults, ApiError> {
        let (query, limit) = validate_search(params, &self.config)?;
        let results = self
            .catalog
            .search(&query, &self.config.lookup_options(limit));
        Ok(SearchResults { results })
    }
}

/// Query string of `/api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub num_results: Option<i64>,
}

/// Client-facing error, rendered as `{ "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Check the query parameters, returning the query and result count.
pub fn validate_search(params: &SearchParams, config: &SearchConfig) -> Result<(String, usize), ApiError> {
    let q = params
        .q
        .as_deref()
        .ok_or_else(|| ApiError::unprocessable("query parameter `q` is required"))?;
    let len = q.chars().count();
    if len > config.max_query_len {
        return Err(ApiError::unprocessable(format!(
            "`q` must be at most {} characters, got {len}",
            config.max_query_len
        )));
    }

    let n = params
        .num_results
        .unwrap_or(config.default_results as i64);
    if n <= 0 || n as u64 > config.max_results as u64 {
        return Err(ApiError::unprocessable(format!(
            "`num_results` must be between 1 and {}, got {n}",
            config.max_results
        )));
    }

    Ok((q.to_string(), n as usize))
}

// ── Handlers ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    glyphs: usize,
}

#[derive(Serialize)]
struct InfoResponse {
    title: String,
    version: String,
    glyphs: usize,
}

async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        glyphs: state.catalog.len(),
    })
}

async fn info(State(state): State<Arc<ServerState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        title: state.config.app_title.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        glyphs: state.catalog.len(),
    })
}

async fn search(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let results = state.search(&params)?;
    tracing::debug!(q = ?params.q, results = results.results.len(), "search");
    Ok(Json(results))
}

/// CORS layer from the configured origins.
pub fn cors_layer(config: &SearchConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin \"{o}\"");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Assemble the service router.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/health", get(health))
        .route("/api", get(info))
        .route("/api/search", get(search))
        .layer(cors)
        .with_state(state)
}
