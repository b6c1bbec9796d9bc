//! Configured end-to-end pipeline from raw file text to display output.

use std::time::Instant;

use tracing::{debug, info};

use super::{CaseExtractor, Result};
use crate::document::DocumentIndex;
use crate::format;
use crate::models::case::CaseText;
use crate::models::config::FormatConfig;

/// Output of the full pipeline for one read request.
#[derive(Debug, Clone)]
pub struct ExtractedJudgment {
    /// Raw extracted case: trimmed body plus parallel citations.
    pub case: CaseText,

    /// Display-safe paragraph units: escaped, terminology-protected.
    pub paragraphs: Vec<String>,

    /// Document-quality warnings from the validation pass, if enabled.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Pipeline runner: locator, citation collector, then the formatter.
///
/// Each call owns its input and touches no shared state, so one extractor
/// may serve any number of threads.
pub struct JudgmentExtractor {
    format: FormatConfig,
    validate_document: bool,
}

impl JudgmentExtractor {
    /// Create an extractor with default formatting and no validation pass.
    pub fn new() -> Self {
        Self {
            format: FormatConfig::default(),
            validate_document: false,
        }
    }

    /// Set the formatter configuration.
    pub fn with_format(mut self, config: FormatConfig) -> Self {
        self.format = config;
        self
    }

    /// Also run the whole-document validation parse and surface its
    /// data-quality warnings with the result.
    pub fn with_document_validation(mut self, validate: bool) -> Self {
        self.validate_document = validate;
        self
    }

    /// Run the three stages for one read request.
    pub fn extract(&self, document: &str, anchor: &str) -> Result<ExtractedJudgment> {
        let start = Instant::now();
        info!(
            "extracting case {} from {} characters",
            anchor,
            document.len()
        );

        let case = super::extract_case(document, anchor)?;
        let paragraphs = format::format_paragraphs(&case.body, &self.format);

        let mut warnings = Vec::new();
        if self.validate_document {
            warnings = DocumentIndex::parse(document)?.warnings().to_vec();
        }

        debug!(
            "extracted {} paragraphs, {} parallel citations",
            paragraphs.len(),
            case.parallel_citations.len()
        );

        Ok(ExtractedJudgment {
            case,
            paragraphs,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for JudgmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseExtractor for JudgmentExtractor {
    fn extract_case(&self, document: &str, anchor: &str) -> Result<CaseText> {
        super::extract_case(document, anchor)
    }
}
