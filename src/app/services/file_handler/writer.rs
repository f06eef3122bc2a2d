//! Server workbook serialization
//!
//! Writes the merged record list and the region index back into a fresh
//! workbook: a data page holding the headline and one row per record, and
//! a region page listing every merged region in ascending order.

use rust_xlsxwriter::Workbook;
use std::collections::BTreeSet;

use crate::app::models::{ConsumptionRecord, DataKind, Readings, Region};
use crate::constants::{columns, DATA_SHEET_NAME, REGIONS_SHEET_NAME};
use crate::Result;

/// Serialize a server workbook to xlsx bytes
pub fn build_server_workbook(
    kind: DataKind,
    records: &[ConsumptionRecord],
    regions: &BTreeSet<Region>,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let data_sheet = workbook.add_worksheet();
    data_sheet.set_name(DATA_SHEET_NAME)?;
    data_sheet.write_string(0, 0, kind.headline())?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        data_sheet.write_number(row, columns::GROUP as u16, record.group as f64)?;
        data_sheet.write_string(row, columns::ADDRESS as u16, &record.address)?;
        let (first, second) = match record.readings {
            Readings::Water { cold, hot } => (cold, hot),
            Readings::Electricity { day, night } => (day, night),
        };
        data_sheet.write_number(row, columns::FIRST_READING as u16, first)?;
        data_sheet.write_number(row, columns::SECOND_READING as u16, second)?;
        data_sheet.write_number(row, columns::REGION as u16, record.region as f64)?;
    }

    let regions_sheet = workbook.add_worksheet();
    regions_sheet.set_name(REGIONS_SHEET_NAME)?;
    for (i, region) in regions.iter().enumerate() {
        regions_sheet.write_number(i as u32, 0, *region as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}
