//! Utility Processor Library
//!
//! A Rust library for validating and merging regional water/electricity
//! consumption spreadsheets against a canonical server workbook.
//!
//! This library provides tools for:
//! - Parsing consumption workbooks into typed records per data kind
//! - Validating a client file's headline against the server file's headline
//! - Detecting regions already imported into the server file
//! - Merging a client region into the server workbook
//! - Deleting a region's rows from the server workbook
//! - Classifying every failure into a single structured parse outcome

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod file_handler;
        pub mod workbook_parser;
    }
    pub mod adapters {
        pub mod store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::store::{DirStore, RemoteStore};
pub use app::models::{ConsumptionRecord, DataKind, Readings, Region};
pub use app::services::file_handler::FileHandler;
pub use app::services::workbook_parser::{ParseOutcome, WorkbookParser};
pub use config::HandlerConfig;

/// Result type alias for the utility processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for consumption workbook processing
///
/// The parse orchestrator never lets these escape its public entry points;
/// they are classified into [`ParseOutcome`] variants at the boundary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("workbook error in '{file}': {message}")]
    Workbook { file: String, message: String },

    /// Workbook could not be written
    #[error("workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// A cell did not match the type its column requires
    #[error("cell '{cell}' could not be parsed")]
    CellParse { cell: String },

    /// Client and server headlines differ (or the client headline is empty)
    #[error("client file headline does not match the server file headline")]
    HeadlinesNotEqual,

    /// The client file's region is already present in the server file
    #[error("region {region} already exists in the server file")]
    RegionAlreadyExists { region: u32 },

    /// No region code could be derived from the file name
    #[error("no region code in file name '{file}'")]
    RegionUnresolvable { file: String },

    /// The server file's region index page is missing or malformed
    #[error("region index unavailable in '{file}': {message}")]
    RegionIndexUnavailable { file: String, message: String },

    /// The requested region is not present in the server file
    #[error("region {region} not found in '{file}'")]
    RegionNotFound { file: String, region: u32 },

    /// Remote store operation failed
    #[error("store error for '{name}': {message}")]
    Store { name: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook reading error with context
    pub fn workbook(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a cell parse error carrying an A1-style coordinate
    pub fn cell_parse(cell: impl Into<String>) -> Self {
        Self::CellParse { cell: cell.into() }
    }

    /// Create a duplicate region error
    pub fn region_already_exists(region: u32) -> Self {
        Self::RegionAlreadyExists { region }
    }

    /// Create a region resolution error
    pub fn region_unresolvable(file: impl Into<String>) -> Self {
        Self::RegionUnresolvable { file: file.into() }
    }

    /// Create a region index error
    pub fn region_index_unavailable(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RegionIndexUnavailable {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a region not found error
    pub fn region_not_found(file: impl Into<String>, region: u32) -> Self {
        Self::RegionNotFound {
            file: file.into(),
            region,
        }
    }

    /// Create a store error with context
    pub fn store(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(error: calamine::XlsxError) -> Self {
        Self::Workbook {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}
