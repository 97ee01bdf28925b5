//! End-to-end tests: catalog → lookup → copy texts, plus config on disk.
//!
//! These exercise the public API the way the CLI and the search service
//! use it.

use nerd_search::catalog::GlyphCatalog;
use nerd_search::config::SearchConfig;
use nerd_search::glyph::{
    CopyFormat, EmptyQueryPolicy, GlyphError, GlyphRecord, LookupOptions, SearchResults,
    decode_literal, derive_copy_texts, lookup,
};

fn record(font_name: &str, unicode: &str, description: &str) -> GlyphRecord {
    GlyphRecord {
        font_name: font_name.into(),
        series: "nf".into(),
        group: "md".into(),
        unicode: unicode.into(),
        description: description.into(),
    }
}

#[test]
fn search_then_copy_cat() {
    let catalog = GlyphCatalog::bundled();
    let hits = catalog.search("cat", &LookupOptions::default());
    let cat = hits
        .iter()
        .find(|r| r.font_name == "nf-md-cat")
        .expect("bundled catalog has nf-md-cat");

    let texts = derive_copy_texts(cat).unwrap();
    assert_eq!(
        texts.as_array(),
        ["\u{F011B}", "f011b", "nf-md-cat", "\\uDB80\\uDD1B"]
    );
    assert_eq!(texts.get(CopyFormat::Literal), "\\uDB80\\uDD1B");
}

#[test]
fn every_bundled_literal_round_trips() {
    let catalog = GlyphCatalog::bundled();
    for record in catalog.records() {
        let texts = derive_copy_texts(record).unwrap();
        assert_eq!(texts.hex_code, record.unicode);
        assert_eq!(texts.font_name, record.font_name);
        assert_eq!(decode_literal(&texts.literal).unwrap(), texts.character);
        assert!(texts.literal.is_ascii(), "{} literal not ASCII", record.font_name);
    }
}

#[test]
fn remote_response_decodes_into_lookup_corpus() {
    // Shape returned by GET /api/search.
    let body = r#"{
        "results": [
            {"font_name": "nf-md-cat", "series": "nf", "group": "md", "unicode": "f011b", "description": "cat"},
            {"font_name": "nf-md-broken", "series": "nf", "group": "md", "unicode": "zzzz", "description": "broken"}
        ]
    }"#;
    let parsed: SearchResults = serde_json::from_str(body).unwrap();
    assert_eq!(lookup(&parsed.results, "cat").len(), 1);

    // One bad record fails only its own derivation.
    let errors: Vec<_> = parsed
        .results
        .iter()
        .filter_map(|r| derive_copy_texts(r).err())
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], GlyphError::InvalidCodePoint { .. }));
}

#[test]
fn lookup_empty_corpus_and_single_match() {
    assert!(lookup(&[], "anything").is_empty());
    let corpus = vec![record("nf-md-cat", "f011b", "cat")];
    assert_eq!(lookup(&corpus, "cat"), corpus);
}

#[test]
fn config_drives_catalog_and_lookup() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog_path = dir.path().join("glyphs.json");
    std::fs::write(
        &catalog_path,
        r#"{"nf-md-cat": "f011b", "nf-md-dog": "f0a43", "nf-mdi-cat": "f011b"}"#,
    )
    .unwrap();

    let config_path = dir.path().join("config.toml");
    let config = SearchConfig {
        catalog: Some(catalog_path),
        empty_query: EmptyQueryPolicy::All,
        ..Default::default()
    };
    config.save(&config_path).unwrap();

    let loaded = SearchConfig::load(&config_path).unwrap();
    let catalog = GlyphCatalog::resolve(loaded.catalog.as_deref(), None).unwrap();
    assert_eq!(catalog.len(), 2);

    let everything = catalog.search("", &loaded.lookup_options(10));
    assert_eq!(everything.len(), 2);
    let one = catalog.search("", &loaded.lookup_options(1));
    assert_eq!(one.len(), 1);
}
