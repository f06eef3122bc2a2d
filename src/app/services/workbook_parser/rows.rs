//! Per-kind row parsing into typed records
//!
//! Both data kinds share the same base layout (numeric group, textual
//! address) and differ in what their two meter-reading columns mean.
//! Parsing is fail-fast: the first cell that cannot be coerced to its
//! column's type aborts the whole file with the offending A1 coordinate.

use calamine::Data;

use crate::app::models::{ConsumptionRecord, DataKind, Readings, Region};
use crate::constants::columns;
use crate::{Error, Result};

/// Kind-specific row parsing strategy
///
/// Row 0 is the headline row and fully blank rows carry no record; both
/// yield `Ok(None)`. Server rows carry their region in the region column,
/// local rows take it from the caller.
pub trait RowParser: Send + Sync {
    /// The data kind this parser handles
    fn kind(&self) -> DataKind;

    /// Parse one row of a server file
    fn parse_server_row(&self, row_idx: usize, row: &[Data])
        -> Result<Option<ConsumptionRecord>>;

    /// Parse one row of a local file whose region was resolved from its name
    fn parse_local_row(
        &self,
        region: Region,
        row_idx: usize,
        row: &[Data],
    ) -> Result<Option<ConsumptionRecord>>;
}

/// Select the row parser for a data kind
pub fn row_parser_for(kind: DataKind) -> Box<dyn RowParser> {
    match kind {
        DataKind::Water => Box::new(WaterRowParser),
        DataKind::Electricity => Box::new(ElectricityRowParser),
    }
}

/// Row parser for water consumption files
#[derive(Debug, Default)]
pub struct WaterRowParser;

impl RowParser for WaterRowParser {
    fn kind(&self) -> DataKind {
        DataKind::Water
    }

    fn parse_server_row(
        &self,
        row_idx: usize,
        row: &[Data],
    ) -> Result<Option<ConsumptionRecord>> {
        let Some(region) = server_row_region(row_idx, row)? else {
            return Ok(None);
        };
        build_record(region, row_idx, row, water_readings).map(Some)
    }

    fn parse_local_row(
        &self,
        region: Region,
        row_idx: usize,
        row: &[Data],
    ) -> Result<Option<ConsumptionRecord>> {
        if skip_row(row_idx, row) {
            return Ok(None);
        }
        build_record(region, row_idx, row, water_readings).map(Some)
    }
}

/// Row parser for electricity consumption files
#[derive(Debug, Default)]
pub struct ElectricityRowParser;

impl RowParser for ElectricityRowParser {
    fn kind(&self) -> DataKind {
        DataKind::Electricity
    }

    fn parse_server_row(
        &self,
        row_idx: usize,
        row: &[Data],
    ) -> Result<Option<ConsumptionRecord>> {
        let Some(region) = server_row_region(row_idx, row)? else {
            return Ok(None);
        };
        build_record(region, row_idx, row, electricity_readings).map(Some)
    }

    fn parse_local_row(
        &self,
        region: Region,
        row_idx: usize,
        row: &[Data],
    ) -> Result<Option<ConsumptionRecord>> {
        if skip_row(row_idx, row) {
            return Ok(None);
        }
        build_record(region, row_idx, row, electricity_readings).map(Some)
    }
}

fn water_readings(first: f64, second: f64) -> Readings {
    Readings::Water {
        cold: first,
        hot: second,
    }
}

fn electricity_readings(first: f64, second: f64) -> Readings {
    Readings::Electricity {
        day: first,
        night: second,
    }
}

/// Headline row and blank rows carry no record
fn skip_row(row_idx: usize, row: &[Data]) -> bool {
    row_idx == 0 || row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// Region of a server row, or `None` for rows that carry no record
fn server_row_region(row_idx: usize, row: &[Data]) -> Result<Option<Region>> {
    if skip_row(row_idx, row) {
        return Ok(None);
    }
    index_cell(row, row_idx, columns::REGION).map(Some)
}

/// Assemble a record from the shared base columns plus kind readings
fn build_record(
    region: Region,
    row_idx: usize,
    row: &[Data],
    readings: fn(f64, f64) -> Readings,
) -> Result<ConsumptionRecord> {
    let group = index_cell(row, row_idx, columns::GROUP)?;
    let address = text_cell(row, row_idx, columns::ADDRESS)?;
    let first = numeric_cell(row, row_idx, columns::FIRST_READING)?;
    let second = numeric_cell(row, row_idx, columns::SECOND_READING)?;
    Ok(ConsumptionRecord::new(
        region,
        group,
        address,
        readings(first, second),
    ))
}

/// A1-style coordinate for a zero-based row/column pair
pub fn cell_ref(row: usize, col: usize) -> String {
    let mut letters = String::new();
    let mut c = col;
    loop {
        letters.insert(0, (b'A' + (c % 26) as u8) as char);
        if c < 26 {
            break;
        }
        c = c / 26 - 1;
    }
    format!("{}{}", letters, row + 1)
}

/// Read a numeric cell, failing with its coordinate on any other type
fn numeric_cell(row: &[Data], row_idx: usize, col: usize) -> Result<f64> {
    match row.get(col) {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(i)) => Ok(*i as f64),
        _ => Err(Error::cell_parse(cell_ref(row_idx, col))),
    }
}

/// Read a non-negative whole-number cell (group and region columns)
fn index_cell(row: &[Data], row_idx: usize, col: usize) -> Result<u32> {
    let value = numeric_cell(row, row_idx, col)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::cell_parse(cell_ref(row_idx, col)));
    }
    Ok(value as u32)
}

/// Read a non-empty textual cell, failing with its coordinate otherwise
fn text_cell(row: &[Data], row_idx: usize, col: usize) -> Result<String> {
    match row.get(col) {
        Some(Data::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(Error::cell_parse(cell_ref(row_idx, col))),
    }
}
