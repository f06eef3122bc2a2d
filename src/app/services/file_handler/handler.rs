//! Merge and delete workflows over a server file store
//!
//! Both workflows run the parse orchestrator first and only rewrite the
//! server file once every gate has passed, so a rejected import leaves
//! the server copy untouched.

use calamine::{Reader, Xlsx};
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use super::writer::build_server_workbook;
use crate::app::adapters::store::RemoteStore;
use crate::app::models::{DataKind, Region};
use crate::app::services::workbook_parser::headline::sheet_headline;
use crate::app::services::workbook_parser::region::file_region;
use crate::app::services::workbook_parser::region_index::read_regions;
use crate::app::services::workbook_parser::{ParseOutcome, WorkbookParser};
use crate::config::HandlerConfig;
use crate::constants::DATA_SHEET_INDEX;
use crate::{Error, Result};

/// Result of merging a client region into a server file
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Server file that was rewritten
    pub server_file: String,
    /// Region that was merged in
    pub region: Region,
    /// Records contributed by the client file
    pub merged_records: usize,
    /// Records in the server file after the merge
    pub total_records: usize,
    /// Region index after the merge
    pub regions: BTreeSet<Region>,
}

/// Result of deleting a region from a server file
#[derive(Debug, Clone)]
pub struct DeleteReport {
    /// Server file that was rewritten
    pub server_file: String,
    /// Region that was removed
    pub region: Region,
    /// Records dropped with the region
    pub removed_records: usize,
    /// Records left in the server file
    pub remaining_records: usize,
    /// Region index after the deletion
    pub regions: BTreeSet<Region>,
}

/// Merge/delete handler over a server file store
pub struct FileHandler {
    store: Arc<dyn RemoteStore>,
    config: HandlerConfig,
}

impl FileHandler {
    /// Create a handler over a server file store
    pub fn new(store: Arc<dyn RemoteStore>, config: HandlerConfig) -> Self {
        Self { store, config }
    }

    /// Detect a server file's data kind from its headline
    pub fn server_file_kind(&self, server_name: &str) -> Result<DataKind> {
        let bytes = self.store.fetch(server_name)?;
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| Error::workbook(server_name, e.to_string()))?;
        let range = workbook
            .worksheet_range_at(DATA_SHEET_INDEX)
            .ok_or_else(|| Error::workbook(server_name, "workbook has no sheets"))?
            .map_err(|e| Error::workbook(server_name, e.to_string()))?;
        let headline = sheet_headline(&range)
            .ok_or_else(|| Error::workbook(server_name, "server file has no headline"))?;
        DataKind::from_headline(&headline).ok_or_else(|| {
            Error::workbook(server_name, format!("unrecognized headline '{}'", headline))
        })
    }

    /// Merge a client file's region into a server file
    ///
    /// Runs the headline-checked server parse first; a mismatch,
    /// duplicate region or cell error surfaces as the matching [`Error`]
    /// and leaves the server file untouched.
    pub fn merge_region(
        &self,
        kind: DataKind,
        server_name: &str,
        local_path: &Path,
    ) -> Result<MergeReport> {
        let parser = WorkbookParser::new(kind, self.store.clone(), self.config.clone());

        let (mut merged, server_regions) =
            match parser.parse_server_file_with_headlines_check(server_name, local_path) {
                ParseOutcome::Success {
                    records,
                    server_regions,
                } => (records, server_regions),
                other => return Err(rejection(other, server_name)),
            };
        let mut regions = server_regions.unwrap_or_default();

        let local_records = match parser.parse_client_local_file(local_path) {
            ParseOutcome::Success { records, .. } => records,
            other => return Err(rejection(other, &local_path.to_string_lossy())),
        };

        let region = file_region(local_path, kind)?;
        let merged_records = local_records.len();
        merged.extend(local_records);
        regions.insert(region);

        let bytes = build_server_workbook(kind, &merged, &regions)?;
        self.store.store(server_name, &bytes)?;
        info!(
            "Merged region {} ({} records) into '{}'",
            region, merged_records, server_name
        );

        Ok(MergeReport {
            server_file: server_name.to_string(),
            region,
            merged_records,
            total_records: merged.len(),
            regions,
        })
    }

    /// Delete a region's rows from a server file
    pub fn delete_region(&self, server_name: &str, region: Region) -> Result<DeleteReport> {
        let kind = self.server_file_kind(server_name)?;
        let parser = WorkbookParser::new(kind, self.store.clone(), self.config.clone());

        let records = match parser.parse_server_file(server_name) {
            ParseOutcome::Success { records, .. } => records,
            other => return Err(rejection(other, server_name)),
        };

        let mut regions = self.region_index_or_derived(server_name, &records);
        if !regions.contains(&region) {
            return Err(Error::region_not_found(server_name, region));
        }

        let total = records.len();
        let remaining: Vec<_> = records.into_iter().filter(|r| r.region != region).collect();
        let removed_records = total - remaining.len();
        regions.remove(&region);

        let bytes = build_server_workbook(kind, &remaining, &regions)?;
        self.store.store(server_name, &bytes)?;
        info!(
            "Deleted region {} ({} records) from '{}'",
            region, removed_records, server_name
        );

        Ok(DeleteReport {
            server_file: server_name.to_string(),
            region,
            removed_records,
            remaining_records: remaining.len(),
            regions,
        })
    }

    /// Regions recorded in a server file
    pub fn server_regions(&self, server_name: &str) -> Result<BTreeSet<Region>> {
        let bytes = self.store.fetch(server_name)?;
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| Error::workbook(server_name, e.to_string()))?;
        read_regions(&mut workbook, server_name)
    }

    /// Region index of a server file, rebuilt from its records when the
    /// index page is unreadable
    fn region_index_or_derived(
        &self,
        server_name: &str,
        records: &[crate::ConsumptionRecord],
    ) -> BTreeSet<Region> {
        match self.server_regions(server_name) {
            Ok(regions) => regions,
            Err(e) => {
                warn!(
                    "Region index unreadable in '{}', rebuilding from records: {}",
                    server_name, e
                );
                records.iter().map(|r| r.region).collect()
            }
        }
    }
}

/// Map a non-success parse outcome to the error it classified
fn rejection(outcome: ParseOutcome, file: &str) -> Error {
    match outcome {
        ParseOutcome::HeadlineMismatch => Error::HeadlinesNotEqual,
        ParseOutcome::DuplicateRegion { region } => Error::region_already_exists(region),
        ParseOutcome::CellError { cell } => Error::cell_parse(cell),
        ParseOutcome::Failed { message } => Error::workbook(file, message),
        ParseOutcome::Success { .. } => Error::workbook(file, "unexpected success outcome"),
    }
}
