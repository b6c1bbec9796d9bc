//! Search-string construction.
//!
//! The pure query-building done before a search is handed to the hosted
//! backend: term sanitization, stopword filtering, statute alias expansion,
//! and keyword vs exact-phrase condition lists. Executing the query is the
//! backend's job, not this library's.

mod aliases;
pub mod highlight;

pub use aliases::{aliases_for, StatuteAliases, STATUTES};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Word chars, whitespace, the Bengali block, and hyphen survive; the
    // rest is dropped before the term reaches the backend.
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^\w\s\u{0980}-\u{09FF}-]").unwrap();
}

/// English stopwords dropped from keyword queries.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "in", "and", "or", "is", "are", "was", "were", "be", "to", "for",
    "with", "on", "at", "by", "from", "shall", "will", "am",
];

/// Searchable fields on a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// The editorial headnote.
    Headnote,
    /// The case title.
    Title,
}

/// One case-insensitive substring condition. Conditions are OR-combined by
/// the executing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCondition {
    pub field: SearchField,
    pub needle: String,
}

/// A keyword/statute query ready for the search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// OR-combined match conditions, in priority order.
    pub conditions: Vec<FieldCondition>,
}

impl SearchQuery {
    /// A query with nothing to match never reaches the backend.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Builder mirroring the search form: free-text term, optional statute,
/// exact-phrase toggle.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    term: String,
    statute: Option<String>,
    exact_phrase: bool,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn with_term(mut self, term: &str) -> Self {
        self.term = term.to_string();
        self
    }

    /// Restrict to a statute from the catalogue; unknown names fall back to
    /// searching the name itself.
    pub fn with_statute(mut self, statute: &str) -> Self {
        self.statute = Some(statute.to_string());
        self
    }

    /// Match the whole phrase instead of individual keywords.
    pub fn with_exact_phrase(mut self, exact: bool) -> Self {
        self.exact_phrase = exact;
        self
    }

    /// Build the OR-condition list: statute aliases first, then the term.
    pub fn build(&self) -> SearchQuery {
        let mut conditions = Vec::new();

        if let Some(name) = &self.statute {
            let needles: Vec<&str> = match aliases_for(name) {
                Some(aliases) => aliases.to_vec(),
                None => vec![name.as_str()],
            };
            for field in [SearchField::Headnote, SearchField::Title] {
                for needle in &needles {
                    conditions.push(FieldCondition {
                        field,
                        needle: needle.to_string(),
                    });
                }
            }
        }

        let term = sanitize_term(&self.term);
        if self.exact_phrase {
            let phrase = term.trim();
            if !phrase.is_empty() {
                for field in [SearchField::Headnote, SearchField::Title] {
                    conditions.push(FieldCondition {
                        field,
                        needle: phrase.to_string(),
                    });
                }
            }
        } else {
            for word in keywords(&term) {
                for field in [SearchField::Headnote, SearchField::Title] {
                    conditions.push(FieldCondition {
                        field,
                        needle: word.to_string(),
                    });
                }
            }
        }

        SearchQuery { conditions }
    }
}

/// Strip characters outside word chars, whitespace, the Bengali block, and
/// hyphen.
pub fn sanitize_term(term: &str) -> String {
    UNSAFE_CHARS.replace_all(term, "").to_string()
}

/// Split a sanitized term into searchable keywords: stopwords and
/// single-character words are dropped.
pub fn keywords(term: &str) -> Vec<&str> {
    term.split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .filter(|word| {
            let lower = word.to_lowercase();
            !STOPWORDS.contains(&lower.as_str())
        })
        .collect()
}
