//! Peels stacked citation headers off the front of a case block.
//!
//! Parallel-reported cases share one body; every citation of the case is
//! stacked as its own `===<anchor>===` header at the very top of the block.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored at the start; leading whitespace before the marker allowed.
    static ref LEADING_MARKER: Regex = Regex::new(r"^\s*===(.*?)===").unwrap();
}

/// Strip leading anchor markers one at a time and collect their values.
///
/// Returns the anchors in order of first appearance, deduplicated
/// (case-sensitive), together with the body remaining after the last
/// header. Loops to a fixed point; every iteration consumes at least the
/// six fence characters, so it terminates. Callers must only pass text
/// from before the block's end marker.
pub fn peel_citations(block: &str) -> (Vec<String>, &str) {
    let mut anchors: Vec<String> = Vec::new();
    let mut rest = block;

    while let Some(caps) = LEADING_MARKER.captures(rest) {
        let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if !anchors.iter().any(|a| a == value) {
            anchors.push(value.to_string());
        }
        rest = rest[caps.get(0).map(|m| m.end()).unwrap_or(0)..].trim_start();
    }

    (anchors, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_peel_single_header() {
        let (anchors, body) = peel_citations("===75DLRAD65===\nThe appeal is allowed.");
        assert_eq!(anchors, vec!["75DLRAD65"]);
        assert_eq!(body, "The appeal is allowed.");
    }

    #[test]
    fn test_peel_stacked_headers_in_order() {
        let (anchors, body) = peel_citations("===A=== ===B=== the judgment text");
        assert_eq!(anchors, vec!["A", "B"]);
        assert_eq!(body, "the judgment text");
    }

    #[test]
    fn test_peel_deduplicates_repeated_anchor() {
        let (anchors, body) = peel_citations("===A===\n===B===\n===A===\nbody");
        assert_eq!(anchors, vec!["A", "B"]);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_peel_trims_anchor_values() {
        let (anchors, _) = peel_citations("=== 30 BLD 121 ===\ntext");
        assert_eq!(anchors, vec!["30 BLD 121"]);
    }

    #[test]
    fn test_peel_no_leading_marker() {
        let (anchors, body) = peel_citations("plain text with ===X=== inside");
        assert!(anchors.is_empty());
        assert_eq!(body, "plain text with ===X=== inside");
    }

    #[test]
    fn test_peel_empty_input() {
        let (anchors, body) = peel_citations("");
        assert!(anchors.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_peel_does_not_cross_body_text() {
        // A marker separated from the headers by body text stays in place.
        let (anchors, body) = peel_citations("===A===\nheld that ===B=== applies");
        assert_eq!(anchors, vec!["A"]);
        assert_eq!(body, "held that ===B=== applies");
    }
}
