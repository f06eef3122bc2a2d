//! Region membership index of a server file
//!
//! Server files carry a second page listing every region already merged
//! into them. That page is the single source of truth for "does region X
//! already exist server-side" and also drives region deletion.

use calamine::{Data, Reader, Xlsx};
use std::collections::BTreeSet;
use std::io::{Read, Seek};
use tracing::debug;

use crate::app::models::Region;
use crate::constants::REGIONS_SHEET_INDEX;
use crate::{Error, Result};

/// Read the set of regions recorded in a server workbook's index page
///
/// Fails with [`Error::RegionIndexUnavailable`] when the page is missing
/// or holds anything that is not a whole-number region code.
pub fn read_regions<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    file: &str,
) -> Result<BTreeSet<Region>> {
    let range = workbook
        .worksheet_range_at(REGIONS_SHEET_INDEX)
        .ok_or_else(|| Error::region_index_unavailable(file, "workbook has no region page"))?
        .map_err(|e| Error::region_index_unavailable(file, e.to_string()))?;

    let mut regions = BTreeSet::new();
    for row in range.rows() {
        match row.first() {
            None | Some(Data::Empty) => continue,
            Some(Data::Float(f)) if *f >= 0.0 && f.fract() == 0.0 => {
                regions.insert(*f as Region);
            }
            Some(Data::Int(i)) if *i >= 0 => {
                regions.insert(*i as Region);
            }
            Some(other) => {
                return Err(Error::region_index_unavailable(
                    file,
                    format!("unexpected region index cell: {:?}", other),
                ));
            }
        }
    }

    debug!("Server file '{}' holds {} regions", file, regions.len());
    Ok(regions)
}
