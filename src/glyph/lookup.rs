//! Substring lookup over a glyph corpus.
//!
//! This is the offline stand-in for the remote search service, which ranks
//! glyphs by embedding similarity. Here a record matches when its font name
//! or description contains the query, ignoring case, and matches keep the
//! corpus order.

use serde::{Deserialize, Serialize};

use super::GlyphRecord;

/// What an empty query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQueryPolicy {
    /// No records.
    #[default]
    NoResults,
    /// Every record, subject to the limit.
    All,
}

/// Knobs for [`lookup_with`].
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub empty_query: EmptyQueryPolicy,
    /// Maximum number of matches returned; `None` means unbounded.
    pub limit: Option<usize>,
}

impl LookupOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Records whose font name or description contains `query`, ignoring case.
///
/// The query is used as given: surrounding whitespace is part of the
/// substring. An empty query matches nothing.
pub fn lookup(corpus: &[GlyphRecord], query: &str) -> Vec<GlyphRecord> {
    lookup_with(corpus, query, &LookupOptions::default())
}

/// [`lookup`] with an explicit empty-query policy and result limit.
pub fn lookup_with(corpus: &[GlyphRecord], query: &str, options: &LookupOptions) -> Vec<GlyphRecord> {
    let limit = options.limit.unwrap_or(usize::MAX);
    let needle = query.to_lowercase();

    let results: Vec<GlyphRecord> = if needle.is_empty() {
        match options.empty_query {
            EmptyQueryPolicy::NoResults => Vec::new(),
            EmptyQueryPolicy::All => corpus.iter().take(limit).cloned().collect(),
        }
    } else {
        corpus
            .iter()
            .filter(|r| matches(r, &needle))
            .take(limit)
            .cloned()
            .collect()
    };

    tracing::debug!(query, matches = results.len(), corpus = corpus.len(), "glyph lookup");
    results
}

fn matches(record: &GlyphRecord, needle: &str) -> bool {
    record.font_name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(font_name: &str, description: &str) -> GlyphRecord {
        GlyphRecord {
            font_name: font_name.into(),
            series: "nf".into(),
            group: "md".into(),
            unicode: "f011b".into(),
            description: description.into(),
        }
    }

    fn corpus() -> Vec<GlyphRecord> {
        vec![
            rec("nf-md-cat", "cat"),
            rec("nf-md-dog", "dog"),
            rec("nf-md-cat_outline", "cat outline"),
            rec("nf-fa-heart", "heart"),
        ]
    }

    #[test]
    fn empty_corpus_returns_nothing() {
        assert!(lookup(&[], "cat").is_empty());
        assert!(lookup(&[], "").is_empty());
    }

    #[test]
    fn single_record_matches_description() {
        let corpus = vec![rec("nf-md-cat", "cat")];
        assert_eq!(lookup(&corpus, "cat"), corpus);
    }

    #[test]
    fn matches_preserve_corpus_order() {
        let names: Vec<_> = lookup(&corpus(), "cat")
            .into_iter()
            .map(|r| r.font_name)
            .collect();
        assert_eq!(names, ["nf-md-cat", "nf-md-cat_outline"]);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(lookup(&corpus(), "HEART").len(), 1);
        assert_eq!(lookup(&corpus(), "Nf-Md-Dog").len(), 1);
    }

    #[test]
    fn font_name_matches_even_when_description_does_not() {
        let corpus = vec![rec("nf-fa-github", "octocat")];
        assert_eq!(lookup(&corpus, "fa-git").len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(lookup(&corpus(), "zebra").is_empty());
    }

    #[test]
    fn empty_query_follows_policy() {
        assert!(lookup(&corpus(), "").is_empty());

        let all = LookupOptions {
            empty_query: EmptyQueryPolicy::All,
            limit: None,
        };
        assert_eq!(lookup_with(&corpus(), "", &all).len(), 4);
    }

    #[test]
    fn limit_truncates_after_matching() {
        let opts = LookupOptions::with_limit(1);
        let results = lookup_with(&corpus(), "cat", &opts);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].font_name, "nf-md-cat");

        let all = LookupOptions {
            empty_query: EmptyQueryPolicy::All,
            limit: Some(2),
        };
        assert_eq!(lookup_with(&corpus(), "", &all).len(), 2);
    }

    #[test]
    fn whitespace_is_part_of_the_substring() {
        let names: Vec<_> = lookup(&corpus(), "cat ")
            .into_iter()
            .map(|r| r.font_name)
            .collect();
        assert_eq!(names, ["nf-md-cat_outline"]);

        // A lone space is not an empty query.
        assert_eq!(lookup(&corpus(), " ").len(), 1);
        assert!(lookup(&corpus(), " dog").is_empty());
    }

    #[test]
    fn policy_uses_kebab_case_names() {
        #[derive(Deserialize)]
        struct Wrap {
            p: EmptyQueryPolicy,
        }
        let w: Wrap = toml::from_str("p = \"no-results\"").unwrap();
        assert_eq!(w.p, EmptyQueryPolicy::NoResults);
        let w: Wrap = toml::from_str("p = \"all\"").unwrap();
        assert_eq!(w.p, EmptyQueryPolicy::All);
    }
}
