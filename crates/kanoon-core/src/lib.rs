//! Core library for legal-judgment text extraction and citation linking.
//!
//! This crate provides:
//! - Document segmentation over marker-delimited judgment files
//! - Parallel-citation collection and anchor derivation
//! - Display normalization: HTML-safe paragraphs, terminology protection
//! - Search query construction and match highlighting
//!
//! Every operation is a pure, synchronous function over in-memory strings;
//! fetching documents, caching, and executing search queries belong to the
//! callers.

pub mod citation;
pub mod document;
pub mod error;
pub mod format;
pub mod judgment;
pub mod models;
pub mod search;

pub use citation::{derive_anchor, is_valid_anchor, Citation, Division, Journal};
pub use document::{locate, peel_citations, DocumentIndex, END_MARKER};
pub use error::{CitationError, ExtractError, KanoonError, Result};
pub use format::{escape, normalize, TermRule, TermTable};
pub use judgment::{extract_case, CaseExtractor, ExtractedJudgment, JudgmentExtractor};
pub use models::case::{CaseBlock, CaseText};
pub use models::config::{FormatConfig, ParagraphStyle};
pub use search::{QueryBuilder, SearchField, SearchQuery};
