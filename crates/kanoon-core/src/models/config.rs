//! Presentation configuration passed explicitly into the formatter.

use serde::{Deserialize, Serialize};

use crate::format::terminology::TermTable;

/// How escaped paragraph units are joined for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphStyle {
    /// Units joined by a blank line, no wrapping markup.
    #[default]
    Plain,

    /// Each unit wrapped in `<p>` tags.
    Tagged,
}

/// Formatter configuration: terminology protection plus paragraph layout.
///
/// Owned by the caller and passed into each formatting call; the engine
/// keeps no ambient presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Ordered terminology substitution rules.
    pub terminology: TermTable,

    /// Paragraph join style.
    pub paragraph_style: ParagraphStyle,
}

impl FormatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
