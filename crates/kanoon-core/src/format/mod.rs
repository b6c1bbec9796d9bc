//! Display normalization and formatting for judgment body text.
//!
//! Normalization canonicalizes line endings, joins wrapped lines, and keeps
//! blank lines as the only paragraph boundary. Formatting escapes each
//! paragraph unit for HTML embedding and applies the caller's terminology
//! protection table. This stage never fails.

mod html;
pub mod terminology;

pub use html::escape;
pub use terminology::{TermRule, TermTable};

use crate::models::config::{FormatConfig, ParagraphStyle};

/// Canonicalize whitespace and paragraph structure.
///
/// All line-ending variants become `\n`; a lone line break joins wrapped
/// lines with a space; one or more blank lines collapse to a single
/// paragraph break (`\n\n`); runs of horizontal whitespace collapse to one
/// space; the result is trimmed. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_break = false;
    let mut first = true;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_break = true;
            continue;
        }

        if !first {
            if pending_break {
                out.push_str("\n\n");
            } else {
                out.push(' ');
            }
        }
        push_collapsed(trimmed, &mut out);
        pending_break = false;
        first = false;
    }

    out
}

// Collapse internal whitespace runs to a single space.
fn push_collapsed(line: &str, out: &mut String) {
    let mut prev_was_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}

/// Split normalized text into its paragraph units.
pub fn split_paragraphs(normalized: &str) -> Vec<&str> {
    normalized
        .split("\n\n")
        .filter(|p| !p.is_empty())
        .collect()
}

/// Normalize a body and produce one display-safe unit per paragraph.
///
/// Each unit is HTML-escaped with the terminology table applied; no markup
/// from the source text survives.
pub fn format_paragraphs(body: &str, config: &FormatConfig) -> Vec<String> {
    let normalized = normalize(body);
    let compiled = config.terminology.compile();
    split_paragraphs(&normalized)
        .into_iter()
        .map(|paragraph| terminology::render_protected(paragraph, &compiled))
        .collect()
}

/// Render a whole body according to the configured paragraph style.
pub fn render(body: &str, config: &FormatConfig) -> String {
    let units = format_paragraphs(body, config);
    match config.paragraph_style {
        ParagraphStyle::Plain => units.join("\n\n"),
        ParagraphStyle::Tagged => units
            .iter()
            .map(|unit| format!("<p>{}</p>", unit))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_joins_wrapped_lines() {
        assert_eq!(
            normalize("Line one\nLine two\n\nParagraph two"),
            "Line one Line two\n\nParagraph two"
        );
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
        // A line of spaces counts as blank.
        assert_eq!(normalize("a\n   \nb"), "a\n\nb");
    }

    #[test]
    fn test_normalize_carriage_returns() {
        assert_eq!(normalize("a\r\nb\r\n\r\nc"), "a b\n\nc");
    }

    #[test]
    fn test_normalize_collapses_horizontal_whitespace() {
        assert_eq!(normalize("a  \t  b"), "a b");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  \n  text  \n  "), "text");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Line one\nLine two\n\nParagraph two",
            "  messy\r\n\r\n\r\n  input \t here ",
            "single paragraph",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_split_paragraphs() {
        let normalized = normalize("Line one\nLine two\n\nParagraph two");
        assert_eq!(
            split_paragraphs(&normalized),
            vec!["Line one Line two", "Paragraph two"]
        );
    }

    #[test]
    fn test_format_paragraphs_escapes_markup() {
        let config = FormatConfig::default();
        let units = format_paragraphs("<script>alert(1)</script>\n\nsecond & third", &config);
        assert_eq!(
            units,
            vec![
                "&lt;script&gt;alert(1)&lt;/script&gt;",
                "second &amp; third"
            ]
        );
    }

    #[test]
    fn test_render_tagged_paragraphs() {
        let config = FormatConfig {
            paragraph_style: crate::models::config::ParagraphStyle::Tagged,
            ..FormatConfig::default()
        };
        assert_eq!(render("one\n\ntwo", &config), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_render_plain_paragraphs() {
        let config = FormatConfig::default();
        assert_eq!(render("one\n\ntwo", &config), "one\n\ntwo");
    }
}
