//! Classified result of one parse call
//!
//! Every public entry point of the orchestrator returns exactly one
//! [`ParseOutcome`] variant; no internal error propagates past it. The
//! outcome consumer (a UI or the CLI) branches on the discriminant to
//! render the right message.

use std::collections::BTreeSet;

use crate::app::models::{ConsumptionRecord, Region};
use crate::Error;

/// The single classified result of one parse call
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// All rows parsed; `server_regions` is populated only by the
    /// headline-checked server mode
    Success {
        records: Vec<ConsumptionRecord>,
        server_regions: Option<BTreeSet<Region>>,
    },

    /// Client and server headlines differ; no rows were parsed
    HeadlineMismatch,

    /// The client file's region already exists in the server file;
    /// no rows were parsed
    DuplicateRegion { region: Region },

    /// A cell could not be coerced to its column's type
    CellError { cell: String },

    /// Anything else: I/O failure, malformed workbook, unreadable index
    Failed { message: String },
}

impl ParseOutcome {
    /// Classify an internal error into its outcome variant
    pub(crate) fn from_error(error: Error) -> Self {
        match error {
            Error::CellParse { cell } => ParseOutcome::CellError { cell },
            Error::HeadlinesNotEqual => ParseOutcome::HeadlineMismatch,
            Error::RegionAlreadyExists { region } => ParseOutcome::DuplicateRegion { region },
            other => ParseOutcome::Failed {
                message: other.to_string(),
            },
        }
    }

    /// True for the `Success` variant only
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    /// Parsed records, when the call succeeded
    pub fn records(&self) -> Option<&[ConsumptionRecord]> {
        match self {
            ParseOutcome::Success { records, .. } => Some(records),
            _ => None,
        }
    }

    /// Regions already present in the server file, when the call ran the
    /// headline-checked server mode and succeeded
    pub fn server_regions(&self) -> Option<&BTreeSet<Region>> {
        match self {
            ParseOutcome::Success { server_regions, .. } => server_regions.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseOutcome::Success { records, .. } => {
                write!(f, "parsed {} records successfully", records.len())
            }
            ParseOutcome::HeadlineMismatch => {
                write!(f, "the file headline does not match the server file")
            }
            ParseOutcome::DuplicateRegion { region } => {
                write!(f, "region {} already exists in the server file", region)
            }
            ParseOutcome::CellError { cell } => {
                write!(f, "cell '{}' could not be parsed", cell)
            }
            ParseOutcome::Failed { message } => write!(f, "parse failed: {}", message),
        }
    }
}
