//! Parse orchestration across the three entry modes
//!
//! The orchestrator sequences region extraction, headline checking, the
//! region membership index and row parsing, and classifies every failure
//! into exactly one [`ParseOutcome`] variant at its boundary. Each call
//! builds and returns its own record list; nothing is retained between
//! calls.
//!
//! Ordering is fixed: the headline check precedes the duplicate-region
//! check, which precedes row parsing. Rejecting on metadata is cheaper
//! than parsing a whole sheet, and a duplicate region must never silently
//! overwrite data.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::BTreeSet;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::headline::{headlines_equal, sheet_headline};
use super::outcome::ParseOutcome;
use super::region::file_region;
use super::region_index::read_regions;
use super::rows::{row_parser_for, RowParser};
use crate::app::adapters::store::RemoteStore;
use crate::app::models::{ConsumptionRecord, DataKind, Region};
use crate::config::HandlerConfig;
use crate::constants::DATA_SHEET_INDEX;
use crate::{Error, Result};

/// Parse orchestrator for one data kind
///
/// Synchronous and single-threaded per invocation; safe to call
/// repeatedly. Callers that write to the same server file from several
/// places must serialize those writes themselves.
pub struct WorkbookParser {
    kind: DataKind,
    rows: Box<dyn RowParser>,
    store: Arc<dyn RemoteStore>,
    config: HandlerConfig,
}

impl WorkbookParser {
    /// Create a parser for the given data kind over a server file store
    pub fn new(kind: DataKind, store: Arc<dyn RemoteStore>, config: HandlerConfig) -> Self {
        Self {
            kind,
            rows: row_parser_for(kind),
            store,
            config,
        }
    }

    /// The data kind this parser handles
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Parse a client's local file without any server interaction
    pub fn parse_client_local_file(&self, path: &Path) -> ParseOutcome {
        info!("Parsing local {} file: {}", self.kind, path.display());
        match self.local_records(path) {
            Ok(records) => ParseOutcome::Success {
                records,
                server_regions: None,
            },
            Err(e) => classify(e, &path.to_string_lossy()),
        }
    }

    /// Parse a server file after checking it against a local file
    ///
    /// Headline mismatch and duplicate region stop the call before any
    /// row parsing happens. On success the outcome carries the server
    /// file's region set for display/selection.
    pub fn parse_server_file_with_headlines_check(
        &self,
        server_name: &str,
        local_path: &Path,
    ) -> ParseOutcome {
        info!(
            "Parsing server {} file '{}' against local file: {}",
            self.kind,
            server_name,
            local_path.display()
        );
        match self.checked_server_records(server_name, local_path) {
            Ok((records, regions)) => ParseOutcome::Success {
                records,
                server_regions: Some(regions),
            },
            Err(e) => classify(e, server_name),
        }
    }

    /// Parse a server file without headline or region gating
    ///
    /// Used by operations that only need the existing records, such as
    /// region deletion.
    pub fn parse_server_file(&self, server_name: &str) -> ParseOutcome {
        info!("Parsing server {} file: {}", self.kind, server_name);
        match self.server_records(server_name) {
            Ok(records) => ParseOutcome::Success {
                records,
                server_regions: None,
            },
            Err(e) => classify(e, server_name),
        }
    }

    fn local_records(&self, path: &Path) -> Result<Vec<ConsumptionRecord>> {
        let region = file_region(path, self.kind)?;
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| Error::workbook(path.to_string_lossy(), e.to_string()))?;
        let range = first_sheet_range(&mut workbook, &path.to_string_lossy())?;
        self.collect_rows(&range, |row_idx, row| {
            self.rows.parse_local_row(region, row_idx, row)
        })
    }

    fn checked_server_records(
        &self,
        server_name: &str,
        local_path: &Path,
    ) -> Result<(Vec<ConsumptionRecord>, BTreeSet<Region>)> {
        let bytes = self.store.fetch(server_name)?;
        let mut server_workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| Error::workbook(server_name, e.to_string()))?;
        let server_range = first_sheet_range(&mut server_workbook, server_name)?;

        let server_headline = sheet_headline(&server_range);
        let local_headline = self.local_headline(local_path);
        if !headlines_equal(server_headline.as_deref(), local_headline.as_deref()) {
            return Err(Error::HeadlinesNotEqual);
        }

        let server_regions = self.server_region_index(&mut server_workbook, server_name)?;
        let local_region = file_region(local_path, self.kind)?;
        if server_regions.contains(&local_region) {
            return Err(Error::region_already_exists(local_region));
        }

        let records = self.collect_rows(&server_range, |row_idx, row| {
            self.rows.parse_server_row(row_idx, row)
        })?;
        Ok((records, server_regions))
    }

    fn server_records(&self, server_name: &str) -> Result<Vec<ConsumptionRecord>> {
        let bytes = self.store.fetch(server_name)?;
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| Error::workbook(server_name, e.to_string()))?;
        let range = first_sheet_range(&mut workbook, server_name)?;
        self.collect_rows(&range, |row_idx, row| {
            self.rows.parse_server_row(row_idx, row)
        })
    }

    /// Region index of a server file, honoring the configured policy for
    /// an unreadable index page
    fn server_region_index<RS: Read + Seek>(
        &self,
        workbook: &mut Xlsx<RS>,
        server_name: &str,
    ) -> Result<BTreeSet<Region>> {
        match read_regions(workbook, server_name) {
            Ok(regions) => Ok(regions),
            Err(e @ Error::RegionIndexUnavailable { .. }) if self.config.permissive_region_index => {
                warn!(
                    "Region index unreadable, treating as empty per policy: {}",
                    e
                );
                Ok(BTreeSet::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Drive the row parser over a sheet range, in sheet order
    fn collect_rows<F>(&self, range: &Range<Data>, parse: F) -> Result<Vec<ConsumptionRecord>>
    where
        F: Fn(usize, &[Data]) -> Result<Option<ConsumptionRecord>>,
    {
        let start_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let mut records = Vec::new();
        for (i, row) in range.rows().enumerate() {
            if let Some(record) = parse(start_row + i, row)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Headline of a local file; any read failure fails closed as `None`
    fn local_headline(&self, path: &Path) -> Option<String> {
        let mut workbook: Xlsx<_> = match open_workbook(path) {
            Ok(workbook) => workbook,
            Err(e) => {
                warn!("Could not open local file for headline check: {}", e);
                return None;
            }
        };
        match first_sheet_range(&mut workbook, &path.to_string_lossy()) {
            Ok(range) => sheet_headline(&range),
            Err(e) => {
                warn!("Could not read local file headline: {}", e);
                None
            }
        }
    }
}

/// First sheet of a workbook as a cell range
fn first_sheet_range<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    file: &str,
) -> Result<Range<Data>> {
    workbook
        .worksheet_range_at(DATA_SHEET_INDEX)
        .ok_or_else(|| Error::workbook(file, "workbook has no sheets"))?
        .map_err(|e| Error::workbook(file, e.to_string()))
}

/// Classify an internal error at the entry point boundary, logging the
/// unexpected ones
fn classify(error: Error, file: &str) -> ParseOutcome {
    match &error {
        Error::CellParse { cell } => {
            error!("Error during parsing cell '{}' of '{}'", cell, file);
        }
        Error::HeadlinesNotEqual | Error::RegionAlreadyExists { .. } => {}
        other => {
            error!("Error during parsing file '{}': {}", file, other);
        }
    }
    ParseOutcome::from_error(error)
}
