//! The judgment extraction pipeline: locate, collect citations, format.

mod extractor;

pub use extractor::{ExtractedJudgment, JudgmentExtractor};

use crate::document;
use crate::error::ExtractError;
use crate::models::case::CaseText;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Trait for case extraction backends.
pub trait CaseExtractor {
    /// Extract one case's text and parallel citations from a document.
    fn extract_case(&self, document: &str, anchor: &str) -> Result<CaseText>;
}

/// Extract one case from a raw judgment file.
///
/// Runs the locator and the citation collector. The returned body is the
/// trimmed raw text with its stacked citation headers removed; pass it to
/// [`crate::format`] for display.
pub fn extract_case(document: &str, anchor: &str) -> Result<CaseText> {
    let block = document::locate(document, anchor)?;
    let (anchors, body) = document::peel_citations(block);
    Ok(CaseText {
        body: body.to_string(),
        parallel_citations: anchors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_containment() {
        let body = "The rule is made absolute.\nNo order as to costs.";
        let document = format!(
            "===Z===earlier case===End===\n===A===\n{}\n===End===\nsuffix",
            body
        );

        let case = extract_case(&document, "A").unwrap();
        assert_eq!(case.body, body.trim());
        assert_eq!(case.parallel_citations, vec!["A"]);
    }

    #[test]
    fn test_first_block_with_blank_prefix() {
        let body = "Body of the very first case.";
        let document = format!("\n\n===A===\n{}\n===End===", body);

        let case = extract_case(&document, "A").unwrap();
        assert_eq!(case.body, body);
    }

    #[test]
    fn test_parallel_citations_include_target() {
        let document = "===75DLRAD65===\n===28BLDAD112===\nShared body.\n===End===";
        let case = extract_case(document, "28BLDAD112").unwrap();
        assert_eq!(case.parallel_citations, vec!["75DLRAD65", "28BLDAD112"]);
        assert_eq!(case.body, "Shared body.");
    }

    #[test]
    fn test_back_to_back_blocks_do_not_bleed() {
        let document = concat!(
            "===End===",
            "===A===bodyA===End===",
            "===B===bodyB===End===",
        );
        let case = extract_case(document, "B").unwrap();
        assert_eq!(case.body, "bodyB");
        assert!(!case.body.contains("bodyA"));
    }

    #[test]
    fn test_missing_end_marker() {
        assert_eq!(
            extract_case("===A===some text", "A"),
            Err(ExtractError::EndMarkerNotFound {
                anchor: "A".to_string()
            })
        );
    }

    #[test]
    fn test_missing_anchor() {
        assert_eq!(
            extract_case("===End===", "ZZZ"),
            Err(ExtractError::AnchorNotFound {
                anchor: "ZZZ".to_string()
            })
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_case("", "A"), Err(ExtractError::EmptyDocument));
    }
}
