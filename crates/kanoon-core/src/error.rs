//! Error types for the kanoon-core library.

use thiserror::Error;

/// Main error type for the kanoon library.
#[derive(Error, Debug)]
pub enum KanoonError {
    /// Case extraction error.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Citation parsing error.
    #[error("citation error: {0}")]
    Citation(#[from] CitationError),
}

/// Errors raised while locating a case inside a judgment file.
///
/// All of these are detected by the locator; the citation collector and the
/// formatter cannot fail on well-formed input. None of them are retryable
/// with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The requested anchor marker does not occur anywhere in the document.
    #[error("anchor marker not found: {anchor}")]
    AnchorNotFound {
        /// The anchor that was searched for.
        anchor: String,
    },

    /// An anchor was found but no terminating end marker follows it. The
    /// document is malformed or truncated.
    #[error("no end marker after anchor: {anchor}")]
    EndMarkerNotFound {
        /// The anchor whose block is unterminated.
        anchor: String,
    },

    /// The document is empty or contains only whitespace.
    #[error("document is empty")]
    EmptyDocument,
}

/// Errors raised while parsing a citation string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    /// The input does not have the volume/journal/page shape.
    #[error("unrecognized citation: {0}")]
    Unrecognized(String),

    /// The journal abbreviation is not in the catalogue.
    #[error("unknown journal: {0}")]
    UnknownJournal(String),

    /// The division abbreviation is not AD or HCD.
    #[error("unknown division: {0}")]
    UnknownDivision(String),
}

/// Result type for the kanoon library.
pub type Result<T> = std::result::Result<T, KanoonError>;
