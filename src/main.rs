//! nerd-search CLI: find Nerd Fonts glyphs and print their copy texts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use nerd_search::catalog::GlyphCatalog;
use nerd_search::client::SearchClient;
use nerd_search::config::SearchConfig;
use nerd_search::glyph::{
    CopyFormat, EmptyQueryPolicy, GlyphError, GlyphRecord, decode_literal, derive_copy_texts,
    unicode_literal,
};
use nerd_search::paths::NerdPaths;

#[derive(Parser)]
#[command(name = "nerd-search", version, about = "Search Nerd Fonts glyphs")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/nerd-search/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Glyph catalog JSON file.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Base URL of a search service to query instead of the local catalog.
    #[arg(long, global = true)]
    remote: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search glyphs by name or description.
    Search {
        /// Query text (case-insensitive substring).
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,

        /// Print only this copy text per match (char, hex, name, literal).
        #[arg(long)]
        format: Option<CopyFormat>,

        /// Let an empty query list every glyph.
        #[arg(long)]
        all: bool,
    },

    /// Print the copy texts of one glyph.
    Copy {
        /// Font name, e.g. nf-md-cat.
        font_name: String,

        /// Print only this copy text (char, hex, name, literal).
        #[arg(long)]
        format: Option<CopyFormat>,
    },

    /// Escape a string as a \uXXXX literal.
    Literal {
        text: String,
    },

    /// Decode a \uXXXX literal back to text.
    Decode {
        literal: String,
    },

    /// Show catalog and configuration details.
    Info,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Only needed when a path was not given explicitly.
    let paths = NerdPaths::resolve().ok();
    let config_path = cli
        .config
        .clone()
        .or_else(|| paths.as_ref().map(NerdPaths::config_file));
    let mut config = match &config_path {
        Some(path) => SearchConfig::load_or_default(path)?,
        None => SearchConfig::default(),
    };
    if cli.catalog.is_some() {
        config.catalog = cli.catalog.clone();
    }
    if cli.remote.is_some() {
        config.remote = cli.remote.clone();
    }

    match cli.command {
        Commands::Search {
            query,
            limit,
            format,
            all,
        } => {
            let limit = limit.unwrap_or(config.default_results);
            let records = match &config.remote {
                Some(url) => {
                    config.check_remote_search(&query, limit, all)?;
                    SearchClient::new(url).search(&query, limit)?
                }
                None => {
                    let catalog = open_catalog(&config, paths.as_ref())?;
                    let mut options = config.lookup_options(limit);
                    if all {
                        options.empty_query = EmptyQueryPolicy::All;
                    }
                    catalog.search(&query, &options)
                }
            };

            if records.is_empty() {
                eprintln!("No glyphs match \"{query}\".");
            }
            for record in &records {
                print_record(record, format);
            }
        }

        Commands::Copy { font_name, format } => {
            let record = match &config.remote {
                Some(url) => SearchClient::new(url)
                    .find(&font_name, config.max_query_len, config.max_results)?
                    .ok_or_else(|| GlyphError::UnknownGlyph {
                        font_name: font_name.clone(),
                    })?,
                None => open_catalog(&config, paths.as_ref())?
                    .require(&font_name)?
                    .clone(),
            };
            let texts = derive_copy_texts(&record)?;
            match format {
                Some(f) => println!("{}", texts.get(f)),
                None => {
                    for (f, text) in texts.iter() {
                        println!("{:<15} {text}", f.label());
                    }
                }
            }
        }

        Commands::Literal { text } => {
            println!("{}", unicode_literal(&text));
        }

        Commands::Decode { literal } => {
            println!("{}", decode_literal(&literal)?);
        }

        Commands::Info => {
            match &config_path {
                Some(path) if path.exists() => println!("Config: {}", path.display()),
                Some(path) => println!("Config: {} (not found, using defaults)", path.display()),
                None => println!("Config: (defaults)"),
            }
            match &config.remote {
                Some(url) => {
                    let health = SearchClient::new(url).health()?;
                    println!(
                        "Remote: {url} ({}, v{}, {} glyphs)",
                        health.status, health.version, health.glyphs
                    );
                }
                None => {
                    let catalog = open_catalog(&config, paths.as_ref())?;
                    println!("Glyphs: {}", catalog.len());
                }
            }
            let toml = toml::to_string_pretty(&config).into_diagnostic()?;
            println!("\n{toml}");
        }
    }

    Ok(())
}

fn open_catalog(config: &SearchConfig, paths: Option<&NerdPaths>) -> Result<GlyphCatalog> {
    let fallback = paths.map(NerdPaths::catalog_file);
    Ok(GlyphCatalog::resolve(
        config.catalog.as_deref(),
        fallback.as_deref(),
    )?)
}

fn print_record(record: &GlyphRecord, format: Option<CopyFormat>) {
    match format {
        Some(f) => match derive_copy_texts(record) {
            Ok(texts) => println!("{}", texts.get(f)),
            Err(e) => tracing::warn!("{e}"),
        },
        None => {
            let glyph = derive_copy_texts(record)
                .map(|t| t.character)
                .unwrap_or_else(|_| "?".to_string());
            println!(
                "{glyph}  {:<32} {:<8} {}",
                record.font_name, record.unicode, record.description
            );
        }
    }
}
