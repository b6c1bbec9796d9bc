//! Locates one case's body span inside a multi-case document.

use super::{anchor_token, END_KEYWORD, END_MARKER};
use crate::error::ExtractError;

/// Find the raw block of text addressed by `anchor`.
///
/// The block runs from just after the nearest end marker preceding the
/// anchor (or the start of the document) up to the first end marker at or
/// after it. The returned slice is trimmed; the stacked citation headers
/// are still attached and are peeled by [`super::peel_citations`].
///
/// The search is case-sensitive, exact-substring, first-match-wins.
pub fn locate<'a>(document: &'a str, anchor: &str) -> Result<&'a str, ExtractError> {
    if document.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    // The end marker matches the anchor-token shape for the keyword "End",
    // so the keyword can never address a case.
    if anchor == END_KEYWORD {
        return Err(ExtractError::AnchorNotFound {
            anchor: anchor.to_string(),
        });
    }

    let token = anchor_token(anchor);
    let anchor_at = document
        .find(&token)
        .ok_or_else(|| ExtractError::AnchorNotFound {
            anchor: anchor.to_string(),
        })?;

    let end_at = document[anchor_at..]
        .find(END_MARKER)
        .map(|offset| anchor_at + offset)
        .ok_or_else(|| ExtractError::EndMarkerNotFound {
            anchor: anchor.to_string(),
        })?;

    let block_start = document[..anchor_at]
        .rfind(END_MARKER)
        .map(|at| at + END_MARKER.len())
        .unwrap_or(0);

    Ok(document[block_start..end_at].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_single_block() {
        let document = "===75DLRAD65===\nThe appeal is allowed.\n===End===";
        let block = locate(document, "75DLRAD65").unwrap();
        assert_eq!(block, "===75DLRAD65===\nThe appeal is allowed.");
    }

    #[test]
    fn test_locate_uses_nearest_preceding_end() {
        let document = concat!(
            "===End===",
            "===A===bodyA===End===",
            "===B===bodyB===End===",
        );
        let block = locate(document, "B").unwrap();
        assert_eq!(block, "===B===bodyB");
        assert!(!block.contains("bodyA"));
    }

    #[test]
    fn test_locate_first_block_starts_at_document_start() {
        let document = "===A===bodyA===End======B===bodyB===End===";
        let block = locate(document, "A").unwrap();
        assert_eq!(block, "===A===bodyA");
    }

    #[test]
    fn test_locate_missing_anchor() {
        let result = locate("===End===", "ZZZ");
        assert_eq!(
            result,
            Err(ExtractError::AnchorNotFound {
                anchor: "ZZZ".to_string()
            })
        );
    }

    #[test]
    fn test_locate_missing_end_marker() {
        let result = locate("===A===some text", "A");
        assert_eq!(
            result,
            Err(ExtractError::EndMarkerNotFound {
                anchor: "A".to_string()
            })
        );
    }

    #[test]
    fn test_locate_empty_document() {
        assert_eq!(locate("", "A"), Err(ExtractError::EmptyDocument));
        assert_eq!(locate("  \n\t ", "A"), Err(ExtractError::EmptyDocument));
    }

    #[test]
    fn test_locate_rejects_reserved_keyword() {
        let document = "===A===body===End===";
        assert_eq!(
            locate(document, "End"),
            Err(ExtractError::AnchorNotFound {
                anchor: "End".to_string()
            })
        );
    }

    #[test]
    fn test_locate_first_occurrence_wins() {
        let document = "===A===first===End=== ===A===second===End===";
        let block = locate(document, "A").unwrap();
        assert_eq!(block, "===A===first");
    }
}
