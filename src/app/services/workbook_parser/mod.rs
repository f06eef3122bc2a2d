//! Consumption workbook parser
//!
//! This module is the core of the processor: it reads workbook rows into
//! typed records and keeps a client file and a server file consistent with
//! each other before any merge happens.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parse orchestration across the three entry modes
//! - [`headline`] - Headline extraction and equality policy
//! - [`region`] - Region code extraction from file names
//! - [`rows`] - Per-kind row parsing into [`ConsumptionRecord`]s
//! - [`region_index`] - Region membership index of a server file
//! - [`outcome`] - The single classified result of one parse call
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use utility_processor::{DataKind, DirStore, HandlerConfig, WorkbookParser};
//!
//! let store = Arc::new(DirStore::new("./server-files"));
//! let parser = WorkbookParser::new(DataKind::Water, store, HandlerConfig::default());
//! let outcome = parser.parse_client_local_file(std::path::Path::new("water-region-7.xlsx"));
//! println!("{}", outcome);
//! ```
//!
//! [`ConsumptionRecord`]: crate::ConsumptionRecord

pub mod headline;
pub mod outcome;
pub mod parser;
pub mod region;
pub mod region_index;
pub mod rows;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use outcome::ParseOutcome;
pub use parser::WorkbookParser;
pub use rows::{ElectricityRowParser, RowParser, WaterRowParser};
