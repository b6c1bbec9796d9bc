//! Case data models.

use serde::{Deserialize, Serialize};

/// One case block recovered from a judgment file: the unit bounded by a run
/// of anchor markers and the next end marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBlock {
    /// Citation anchors addressing this body, in order of appearance.
    pub anchors: Vec<String>,

    /// Raw body text with the markers stripped, trimmed.
    pub body: String,
}

/// The extracted view handed to callers: one case's text plus the alternate
/// citations that share it. Computed per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseText {
    /// Trimmed raw body text.
    pub body: String,

    /// Ordered, distinct citation anchors found stacked above the body,
    /// including the one the caller searched for.
    pub parallel_citations: Vec<String>,
}

impl From<&CaseBlock> for CaseText {
    fn from(block: &CaseBlock) -> Self {
        Self {
            body: block.body.clone(),
            parallel_citations: block.anchors.clone(),
        }
    }
}
