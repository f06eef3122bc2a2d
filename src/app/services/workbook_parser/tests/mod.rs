//! Test utilities and workbook fixtures for parser testing
//!
//! Shared helpers that build real xlsx fixtures with rust_xlsxwriter,
//! either as raw cell grids (for malformed-file cases) or through the
//! production server workbook writer.

use rust_xlsxwriter::Workbook;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use crate::app::adapters::store::DirStore;
use crate::app::models::{ConsumptionRecord, DataKind, Readings, Region};
use crate::app::services::file_handler::writer::build_server_workbook;
use crate::config::HandlerConfig;
use crate::app::services::workbook_parser::WorkbookParser;

mod parser_tests;

/// One fixture cell; rows may simply omit cells to leave them unwritten
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Num(f64),
}

pub fn t(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn n(v: f64) -> Cell {
    Cell::Num(v)
}

/// Build an xlsx workbook from named sheets of raw cell grids
pub fn raw_workbook(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => {
                        sheet.write_string(r as u32, c as u16, s).unwrap();
                    }
                    Cell::Num(v) => {
                        sheet.write_number(r as u32, c as u16, *v).unwrap();
                    }
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// A local client file: headline plus group/address/reading/reading rows
pub fn local_file_bytes(kind: DataKind, rows: &[(u32, &str, f64, f64)]) -> Vec<u8> {
    let mut grid = vec![vec![t(kind.headline())]];
    for (group, address, first, second) in rows {
        grid.push(vec![
            n(*group as f64),
            t(address),
            n(*first),
            n(*second),
        ]);
    }
    raw_workbook(&[("Data", grid)])
}

/// A server file built through the production writer
pub fn server_file_bytes(
    kind: DataKind,
    records: &[ConsumptionRecord],
    regions: &[Region],
) -> Vec<u8> {
    let regions: BTreeSet<Region> = regions.iter().copied().collect();
    build_server_workbook(kind, records, &regions).unwrap()
}

pub fn water_record(region: Region, group: u32, address: &str, cold: f64, hot: f64) -> ConsumptionRecord {
    ConsumptionRecord::new(region, group, address, Readings::Water { cold, hot })
}

pub fn electricity_record(
    region: Region,
    group: u32,
    address: &str,
    day: f64,
    night: f64,
) -> ConsumptionRecord {
    ConsumptionRecord::new(region, group, address, Readings::Electricity { day, night })
}

/// Write fixture bytes under a directory and return the path
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// A parser over a fresh store directory, plus the tempdir keeping it alive
pub fn test_parser(kind: DataKind) -> (WorkbookParser, TempDir) {
    test_parser_with_config(kind, HandlerConfig::default())
}

pub fn test_parser_with_config(kind: DataKind, config: HandlerConfig) -> (WorkbookParser, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(DirStore::new(dir.path()));
    let parser = WorkbookParser::new(kind, store, config.with_store_root(dir.path()));
    (parser, dir)
}
