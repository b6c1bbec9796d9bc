//! Ingestion-time document index: one linear parse, O(1) anchor lookup.

use std::collections::HashMap;

use tracing::debug;

use super::{peel_citations, END_KEYWORD, END_MARKER};
use crate::error::ExtractError;
use crate::models::case::{CaseBlock, CaseText};

/// A fully parsed judgment file.
///
/// Splits the document into case blocks in a single pass and maps every
/// anchor to its block, so repeated reads resolve without rescanning the
/// raw text. Duplicate anchors keep the first block, matching the
/// first-match behavior of [`super::locate`]. Data-quality findings are
/// collected as warnings instead of failing the parse.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    blocks: Vec<CaseBlock>,
    by_anchor: HashMap<String, usize>,
    warnings: Vec<String>,
}

impl DocumentIndex {
    /// Parse a judgment file into its case blocks.
    pub fn parse(document: &str) -> Result<Self, ExtractError> {
        if document.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let mut blocks = Vec::new();
        let mut by_anchor: HashMap<String, usize> = HashMap::new();
        let mut warnings = Vec::new();

        let mut segments: Vec<&str> = document.split(END_MARKER).collect();

        // split always yields a final segment after the last end marker.
        let tail = segments.pop().unwrap_or("");
        if !tail.trim().is_empty() {
            warnings.push(format!(
                "content after the final end marker is unreachable: {:?}",
                preview(tail.trim())
            ));
        }

        for segment in segments {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (mut anchors, body) = peel_citations(trimmed);

            anchors.retain(|anchor| {
                if anchor.is_empty() {
                    warnings.push("empty citation anchor dropped".to_string());
                    false
                } else if anchor == END_KEYWORD {
                    warnings.push("reserved keyword used as a citation anchor".to_string());
                    false
                } else {
                    true
                }
            });

            if anchors.is_empty() {
                warnings.push(format!(
                    "case block with no citation anchors: {:?}",
                    preview(trimmed)
                ));
            }

            let at = blocks.len();
            for anchor in &anchors {
                if by_anchor.contains_key(anchor) {
                    warnings.push(format!("duplicate anchor keeps the first block: {}", anchor));
                } else {
                    by_anchor.insert(anchor.clone(), at);
                }
            }

            blocks.push(CaseBlock {
                anchors,
                body: body.to_string(),
            });
        }

        debug!(
            "indexed {} case blocks, {} anchors, {} warnings",
            blocks.len(),
            by_anchor.len(),
            warnings.len()
        );

        Ok(Self {
            blocks,
            by_anchor,
            warnings,
        })
    }

    /// Look up the block addressed by an anchor.
    pub fn get(&self, anchor: &str) -> Option<&CaseBlock> {
        self.by_anchor.get(anchor).map(|&at| &self.blocks[at])
    }

    /// Resolve an anchor to its case text, failing like the locator would.
    pub fn case(&self, anchor: &str) -> Result<CaseText, ExtractError> {
        self.get(anchor)
            .map(CaseText::from)
            .ok_or_else(|| ExtractError::AnchorNotFound {
                anchor: anchor.to_string(),
            })
    }

    /// All case blocks, in document order.
    pub fn blocks(&self) -> &[CaseBlock] {
        &self.blocks
    }

    /// Number of case blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document held no case blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Data-quality warnings collected during the parse.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

// Bounded excerpt for warning messages; avoids slicing mid-character.
fn preview(text: &str) -> String {
    const LIMIT: usize = 40;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(LIMIT).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = concat!(
        "===75DLRAD65===\n===28BLDAD112===\nFirst judgment body.\n===End===\n",
        "===30BLD121===\nSecond judgment body.\n===End===\n",
    );

    #[test]
    fn test_parse_two_blocks() {
        let index = DocumentIndex::parse(DOCUMENT).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.warnings().is_empty());

        let first = index.get("75DLRAD65").unwrap();
        assert_eq!(first.anchors, vec!["75DLRAD65", "28BLDAD112"]);
        assert_eq!(first.body, "First judgment body.");

        let second = index.get("30BLD121").unwrap();
        assert_eq!(second.body, "Second judgment body.");
    }

    #[test]
    fn test_parallel_anchors_share_one_block() {
        let index = DocumentIndex::parse(DOCUMENT).unwrap();
        assert_eq!(
            index.case("28BLDAD112").unwrap().body,
            index.case("75DLRAD65").unwrap().body
        );
    }

    #[test]
    fn test_unknown_anchor_fails_like_locator() {
        let index = DocumentIndex::parse(DOCUMENT).unwrap();
        assert_eq!(
            index.case("ZZZ"),
            Err(ExtractError::AnchorNotFound {
                anchor: "ZZZ".to_string()
            })
        );
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert_eq!(
            DocumentIndex::parse("   \n").unwrap_err(),
            ExtractError::EmptyDocument
        );
    }

    #[test]
    fn test_trailing_content_is_flagged() {
        let document = "===A===body===End======B===truncated tail";
        let index = DocumentIndex::parse(document).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("B").is_none());
        assert!(
            index
                .warnings()
                .iter()
                .any(|w| w.contains("after the final end marker"))
        );
    }

    #[test]
    fn test_duplicate_anchor_keeps_first_block() {
        let document = "===A===first===End======A===second===End===";
        let index = DocumentIndex::parse(document).unwrap();
        assert_eq!(index.case("A").unwrap().body, "first");
        assert!(index.warnings().iter().any(|w| w.contains("duplicate")));
    }

    #[test]
    fn test_block_without_anchors_is_flagged() {
        let document = "stray text with no headers===End===";
        let index = DocumentIndex::parse(document).unwrap();
        assert_eq!(index.len(), 1);
        assert!(
            index
                .warnings()
                .iter()
                .any(|w| w.contains("no citation anchors"))
        );
    }

    #[test]
    fn test_index_agrees_with_locator() {
        let index = DocumentIndex::parse(DOCUMENT).unwrap();
        for anchor in ["75DLRAD65", "28BLDAD112", "30BLD121"] {
            let block = super::super::locate(DOCUMENT, anchor).unwrap();
            let (_, body) = peel_citations(block);
            assert_eq!(index.case(anchor).unwrap().body, body);
        }
    }
}
