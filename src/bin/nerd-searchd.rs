//! nerd-search HTTP service.
//!
//! Serves `/api/search` over the configured glyph catalog. Settings come
//! from `$XDG_CONFIG_HOME/nerd-search/config.toml` (or the path in
//! `NERD_SEARCH_CONFIG`), with `NERD_SEARCH_BIND` / `NERD_SEARCH_PORT`
//! overriding the listen address.
//!
//! Build and run: `cargo run --features server --bin nerd-searchd`

use std::path::PathBuf;
use std::sync::Arc;

use nerd_search::catalog::GlyphCatalog;
use nerd_search::config::SearchConfig;
use nerd_search::error::NerdResult;
use nerd_search::paths::NerdPaths;
use nerd_search::server::{ServerState, router};

fn load_state() -> NerdResult<ServerState> {
    let paths = NerdPaths::resolve()?;
    let config_path = std::env::var("NERD_SEARCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| paths.config_file());

    let mut config = SearchConfig::load_or_default(&config_path)?;
    config.apply_env_overrides()?;

    let catalog_file = paths.catalog_file();
    let catalog = GlyphCatalog::resolve(config.catalog.as_deref(), Some(catalog_file.as_path()))?;
    Ok(ServerState::new(config, catalog))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let state = load_state().unwrap_or_else(|e| {
        tracing::error!("failed to start: {e}");
        std::process::exit(1);
    });
    let addr = state.config.addr();

    tracing::info!(
        glyphs = state.catalog.len(),
        title = %state.config.app_title,
        "nerd-searchd initialized"
    );

    let app = router(Arc::new(state));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("nerd-searchd listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
