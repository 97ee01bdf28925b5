//! Glyph catalog: the corpus searched locally.
//!
//! A catalog is built from a `name → hex` map, the shape of the Nerd Fonts
//! glyph table, or from a list of full records. Entries of the retired
//! `mdi` icon set are dropped, as are names that do not parse.
//!
//! A small sample table is compiled in (see [`GlyphCatalog::bundled`]) so
//! the CLI works without any data file.

use std::collections::BTreeMap;
use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::glyph::{GlyphError, GlyphRecord, GlyphResult, LookupOptions, lookup_with};

const BUNDLED_GLYPHS: &str = include_str!("../data/glyphs.json");

/// Icon set removed from Nerd Fonts; its code points now belong to `md`.
const RETIRED_GROUPS: &[&str] = &["mdi"];

/// Errors from loading a catalog file.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("failed to read glyph catalog: {path}")]
    #[diagnostic(
        code(nerd::catalog::io),
        help("Check that the catalog file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse glyph catalog {path}: {message}")]
    #[diagnostic(
        code(nerd::catalog::parse),
        help(
            "A catalog is a JSON object mapping glyph names to hex code points \
             ({{\"nf-md-cat\": \"f011b\"}}) or a JSON array of glyph records."
        )
    )]
    Parse { path: String, message: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// On-disk catalog layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    NameMap(BTreeMap<String, String>),
    Records(Vec<GlyphRecord>),
}

/// Immutable, searchable set of glyph records.
#[derive(Debug, Clone, Default)]
pub struct GlyphCatalog {
    records: Vec<GlyphRecord>,
}

impl GlyphCatalog {
    /// Build from `(glyph name, hex code point)` pairs.
    pub fn from_name_map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut records = Vec::new();
        let mut retired = 0usize;
        for (name, unicode) in entries {
            match GlyphRecord::from_name(&name, &unicode) {
                Ok(record) if RETIRED_GROUPS.contains(&record.group.as_str()) => retired += 1,
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("skipping catalog entry: {e}"),
            }
        }
        if retired > 0 {
            tracing::debug!(retired, "dropped glyphs from retired icon sets");
        }
        Self::from_records(records)
    }

    /// Build from complete records. Records are sorted by font name.
    pub fn from_records(mut records: Vec<GlyphRecord>) -> Self {
        records.sort_by(|a, b| a.font_name.cmp(&b.font_name));
        records.dedup_by(|a, b| a.font_name == b.font_name);
        Self { records }
    }

    /// The compiled-in sample catalog.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_GLYPHS, "<bundled>").unwrap_or_else(|e| {
            tracing::error!("bundled glyph table is invalid: {e}");
            Self::default()
        })
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let catalog = Self::parse(&data, &path.display().to_string())?;
        tracing::info!(path = %path.display(), glyphs = catalog.len(), "loaded glyph catalog");
        Ok(catalog)
    }

    /// Pick a catalog: an explicit path wins, then `fallback` if the file
    /// exists, then the bundled sample.
    pub fn resolve(explicit: Option<&Path>, fallback: Option<&Path>) -> CatalogResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match fallback {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::bundled()),
        }
    }

    fn parse(data: &str, origin: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(data).map_err(|e| CatalogError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(match file {
            CatalogFile::NameMap(map) => Self::from_name_map(map),
            CatalogFile::Records(records) => Self::from_records(records),
        })
    }

    /// Search the catalog.
    pub fn search(&self, query: &str, options: &LookupOptions) -> Vec<GlyphRecord> {
        lookup_with(&self.records, query, options)
    }

    /// Exact lookup by font name.
    pub fn get(&self, font_name: &str) -> Option<&GlyphRecord> {
        self.records
            .binary_search_by(|r| r.font_name.as_str().cmp(font_name))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, font_name: &str) -> GlyphResult<&GlyphRecord> {
        self.get(font_name).ok_or_else(|| GlyphError::UnknownGlyph {
            font_name: font_name.to_string(),
        })
    }

    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::derive_copy_texts;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, u)| (n.to_string(), u.to_string()))
            .collect()
    }

    #[test]
    fn bundled_catalog_is_usable() {
        let catalog = GlyphCatalog::bundled();
        assert!(!catalog.is_empty());
        for record in catalog.records() {
            assert!(
                derive_copy_texts(record).is_ok(),
                "bundled glyph {} has a bad code point",
                record.font_name
            );
            assert_ne!(record.group, "mdi");
        }
        assert_eq!(catalog.get("nf-md-cat").unwrap().unicode, "f011b");
    }

    #[test]
    fn name_map_skips_retired_and_malformed() {
        let catalog = GlyphCatalog::from_name_map(pairs(&[
            ("nf-md-cat", "f011b"),
            ("nf-mdi-cat", "f011b"),
            ("broken", "f000"),
        ]));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].font_name, "nf-md-cat");
    }

    #[test]
    fn records_are_sorted_and_deduplicated() {
        let catalog = GlyphCatalog::from_name_map(pairs(&[
            ("nf-md-dog", "f0a43"),
            ("nf-fa-heart", "f004"),
            ("nf-md-cat", "f011b"),
        ]));
        let names: Vec<_> = catalog.records().iter().map(|r| r.font_name.as_str()).collect();
        assert_eq!(names, ["nf-fa-heart", "nf-md-cat", "nf-md-dog"]);

        let mut records = catalog.records().to_vec();
        records.push(records[0].clone());
        assert_eq!(GlyphCatalog::from_records(records).len(), 3);
    }

    #[test]
    fn get_and_require() {
        let catalog = GlyphCatalog::bundled();
        assert!(catalog.get("nf-md-cat").is_some());
        assert!(catalog.get("nf-md-unicorn_rainbow").is_none());
        assert!(matches!(
            catalog.require("nf-md-unicorn_rainbow"),
            Err(GlyphError::UnknownGlyph { .. })
        ));
    }

    #[test]
    fn search_uses_lookup_options() {
        let catalog = GlyphCatalog::bundled();
        let hits = catalog.search("heart", &LookupOptions::default());
        assert!(hits.iter().all(|r| r.description.contains("heart")));
        assert!(hits.len() >= 2);
        assert_eq!(catalog.search("heart", &LookupOptions::with_limit(1)).len(), 1);
    }

    #[test]
    fn load_name_map_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("glyphs.json");
        std::fs::write(&path, r#"{"nf-md-cat": "f011b", "nf-fa-star": "f005"}"#).unwrap();

        let catalog = GlyphCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("nf-fa-star").unwrap().description, "star");
    }

    #[test]
    fn load_record_array_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(
            &path,
            r#"[{"font_name":"nf-md-cat","series":"nf","group":"md","unicode":"f011b","description":"cat"}]"#,
        )
        .unwrap();

        let catalog = GlyphCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            GlyphCatalog::load(&missing),
            Err(CatalogError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2, 3]").unwrap();
        assert!(matches!(
            GlyphCatalog::load(&bad),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn resolve_prefers_explicit_then_fallback_then_bundled() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("glyphs.json");
        std::fs::write(&path, r#"{"nf-md-cat": "f011b"}"#).unwrap();
        let absent = dir.path().join("absent.json");

        let (path, absent) = (path.as_path(), absent.as_path());

        assert_eq!(GlyphCatalog::resolve(Some(path), None).unwrap().len(), 1);
        assert_eq!(GlyphCatalog::resolve(None, Some(path)).unwrap().len(), 1);
        assert_eq!(
            GlyphCatalog::resolve(None, Some(absent)).unwrap().len(),
            GlyphCatalog::bundled().len()
        );
        assert!(GlyphCatalog::resolve(Some(absent), None).is_err());
    }
}
