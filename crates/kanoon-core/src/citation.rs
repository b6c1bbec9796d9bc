//! Citation parsing and anchor derivation.
//!
//! A citation such as `75 DLR (AD) 65` names volume 75 of the Dhaka Law
//! Reports, Appellate Division, page 65. Anchors are minted from citations
//! by dropping everything that is not alphanumeric, so that citation
//! becomes the anchor `75DLRAD65`.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::END_KEYWORD;
use crate::error::CitationError;

lazy_static! {
    // volume, journal, optional parenthesized division, page
    static ref CITATION: Regex = Regex::new(
        r"^\s*(\d{1,3})\s+([A-Za-z]{2,4})\s*(?:\(\s*([A-Za-z]{2,3})\s*\))?\s+(\d{1,4})\s*$"
    )
    .unwrap();
}

/// Law journals the catalogue indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Journal {
    /// Appellate Division Cases.
    Adc,
    /// Apex Law Reports.
    Alr,
    /// Bangladesh Law Chronicles.
    Blc,
    /// Bangladesh Legal Decisions.
    Bld,
    /// Bangladesh Law Times.
    Blt,
    /// Counsel Law Reports.
    Clr,
    /// Dhaka Law Reports.
    Dlr,
    /// Law Messenger.
    Lm,
    /// Mainstream Law Reports.
    Mlr,
    /// Supreme Court Online Bulletin.
    Scob,
}

impl Journal {
    /// The abbreviation as printed in a citation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Journal::Adc => "ADC",
            Journal::Alr => "ALR",
            Journal::Blc => "BLC",
            Journal::Bld => "BLD",
            Journal::Blt => "BLT",
            Journal::Clr => "CLR",
            Journal::Dlr => "DLR",
            Journal::Lm => "LM",
            Journal::Mlr => "MLR",
            Journal::Scob => "SCOB",
        }
    }

    /// Parse a journal abbreviation, case-insensitively.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ADC" => Some(Journal::Adc),
            "ALR" => Some(Journal::Alr),
            "BLC" => Some(Journal::Blc),
            "BLD" => Some(Journal::Bld),
            "BLT" => Some(Journal::Blt),
            "CLR" => Some(Journal::Clr),
            "DLR" => Some(Journal::Dlr),
            "LM" => Some(Journal::Lm),
            "MLR" => Some(Journal::Mlr),
            "SCOB" => Some(Journal::Scob),
            _ => None,
        }
    }

    /// All known journals.
    pub fn all() -> &'static [Journal] {
        &[
            Journal::Adc,
            Journal::Alr,
            Journal::Blc,
            Journal::Bld,
            Journal::Blt,
            Journal::Clr,
            Journal::Dlr,
            Journal::Lm,
            Journal::Mlr,
            Journal::Scob,
        ]
    }
}

/// Court division of the reported judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    /// Appellate Division.
    #[serde(rename = "AD")]
    Appellate,
    /// High Court Division.
    #[serde(rename = "HCD")]
    HighCourt,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Appellate => "AD",
            Division::HighCourt => "HCD",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "AD" => Some(Division::Appellate),
            "HCD" => Some(Division::HighCourt),
            _ => None,
        }
    }
}

/// A parsed case citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Journal volume.
    pub volume: u32,

    /// Journal the case is reported in.
    pub journal: Journal,

    /// Division, when the journal prints one.
    pub division: Option<Division>,

    /// Page the report starts on.
    pub page: u32,
}

impl Citation {
    /// Parse a citation such as `75 DLR (AD) 65` or `30 BLD 121`.
    pub fn parse(input: &str) -> Result<Self, CitationError> {
        let caps = CITATION
            .captures(input)
            .ok_or_else(|| CitationError::Unrecognized(input.to_string()))?;

        let journal = Journal::from_str(&caps[2])
            .ok_or_else(|| CitationError::UnknownJournal(caps[2].to_string()))?;

        let division = match caps.get(3) {
            Some(m) => Some(
                Division::from_str(m.as_str())
                    .ok_or_else(|| CitationError::UnknownDivision(m.as_str().to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            volume: caps[1].parse().unwrap_or(0),
            journal,
            division,
            page: caps[4].parse().unwrap_or(0),
        })
    }

    /// The anchor token minted from this citation.
    pub fn anchor(&self) -> String {
        derive_anchor(&self.to_string())
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(division) => write!(
                f,
                "{} {} ({}) {}",
                self.volume,
                self.journal.as_str(),
                division.as_str(),
                self.page
            ),
            None => write!(f, "{} {} {}", self.volume, self.journal.as_str(), self.page),
        }
    }
}

/// Mint an anchor from a raw citation string: punctuation and spaces are
/// dropped, alphanumerics kept.
pub fn derive_anchor(citation: &str) -> String {
    citation.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Whether a string can serve as a citation anchor: non-empty, alphanumeric,
/// and not the reserved end keyword.
pub fn is_valid_anchor(anchor: &str) -> bool {
    !anchor.is_empty() && anchor != END_KEYWORD && anchor.chars().all(|c| c.is_alphanumeric())
}
