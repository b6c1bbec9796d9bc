//! Terminology substitution: ordered pattern rules whose output spans are
//! protected from downstream machine-translation layers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::html::escape;

/// One substitution rule: a regex pattern and its replacement text.
///
/// Replacements may reference capture groups (`$1`, `${name}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRule {
    /// Regex source, validated eagerly by [`TermRule::new`].
    pub pattern: String,

    /// Replacement text.
    pub replacement: String,
}

impl TermRule {
    /// Create a rule, validating the pattern.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        })
    }
}

/// Ordered substitution table. Earlier rules claim a span first; later rules
/// never rewrite inside a claimed span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermTable {
    rules: Vec<TermRule>,
}

impl TermTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, builder style.
    pub fn with_rule(mut self, rule: TermRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: TermRule) {
        self.rules.push(rule);
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[TermRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // Compile the patterns once per formatting call. Rules whose pattern no
    // longer compiles (hand-edited config files) are skipped, not fatal.
    pub(crate) fn compile(&self) -> Vec<(Regex, &str)> {
        self.rules
            .iter()
            .filter_map(|rule| match Regex::new(&rule.pattern) {
                Ok(re) => Some((re, rule.replacement.as_str())),
                Err(error) => {
                    warn!("skipping terminology pattern {:?}: {}", rule.pattern, error);
                    None
                }
            })
            .collect()
    }
}

// A span claimed by a rule, with its expanded replacement.
struct Claim {
    start: usize,
    end: usize,
    text: String,
}

/// Escape one paragraph unit, wrapping every substituted span in a
/// `notranslate` span so translation layers leave it alone.
pub(crate) fn render_protected(paragraph: &str, compiled: &[(Regex, &str)]) -> String {
    let mut claims: Vec<Claim> = Vec::new();

    for (re, replacement) in compiled {
        for caps in re.captures_iter(paragraph) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() == whole.end() {
                continue;
            }
            // First rule in table order wins for a given span.
            if claims
                .iter()
                .any(|c| whole.start() < c.end && c.start < whole.end())
            {
                continue;
            }

            let mut expanded = String::new();
            caps.expand(replacement, &mut expanded);
            claims.push(Claim {
                start: whole.start(),
                end: whole.end(),
                text: expanded,
            });
        }
    }

    if claims.is_empty() {
        return escape(paragraph);
    }

    claims.sort_by_key(|c| c.start);

    let mut out = String::with_capacity(paragraph.len());
    let mut cursor = 0;
    for claim in &claims {
        out.push_str(&escape(&paragraph[cursor..claim.start]));
        out.push_str("<span class=\"notranslate\">");
        out.push_str(&escape(&claim.text));
        out.push_str("</span>");
        cursor = claim.end;
    }
    out.push_str(&escape(&paragraph[cursor..]));
    out
}
