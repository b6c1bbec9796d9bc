//! Query-match highlighting for result lists.

use regex::RegexBuilder;

use crate::format::escape;

/// One run of display text, flagged when it matches a query word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `text` into plain and highlighted segments.
///
/// Every whitespace-separated word of `query` is matched case-insensitively
/// as a literal substring. An empty query yields one plain segment.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(regex::escape)
        .collect();

    if text.is_empty() || words.is_empty() {
        return vec![Segment {
            text,
            highlighted: false,
        }];
    }

    let pattern = match RegexBuilder::new(&words.join("|"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => {
            return vec![Segment {
                text,
                highlighted: false,
            }];
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment {
                text: &text[cursor..found.start()],
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: found.as_str(),
            highlighted: true,
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            highlighted: false,
        });
    }

    segments
}

/// Render `text` as escaped HTML with query matches wrapped in `<mark>`.
pub fn to_html(text: &str, query: &str) -> String {
    highlight(text, query)
        .iter()
        .map(|segment| {
            if segment.highlighted {
                format!("<mark>{}</mark>", escape(segment.text))
            } else {
                escape(segment.text)
            }
        })
        .collect()
}
