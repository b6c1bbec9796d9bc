//! Document segmentation over marker-delimited judgment files.
//!
//! A judgment file is a flat concatenation of case blocks. Each block is a
//! run of anchor markers (`===<anchor>===`, one per citation of the case)
//! followed by the body text and a terminating `===End===`.

mod citations;
mod index;
mod locator;

pub use citations::peel_citations;
pub use index::DocumentIndex;
pub use locator::locate;

/// Fence shared by anchor and end markers.
pub const MARKER_FENCE: &str = "===";

/// Literal that terminates a case block.
pub const END_MARKER: &str = "===End===";

/// Reserved keyword; never usable as a citation anchor.
pub const END_KEYWORD: &str = "End";

/// The literal marker token for an anchor.
pub(crate) fn anchor_token(anchor: &str) -> String {
    format!("{}{}{}", MARKER_FENCE, anchor, MARKER_FENCE)
}
