//! Region code extraction from client file names
//!
//! Client files carry their region in the file name, e.g.
//! `water-region-7.xlsx`. The last run of digits in the file stem is the
//! region code; a stem without one cannot be imported.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::app::models::{DataKind, Region};
use crate::constants::REGION_STEM_PATTERN;
use crate::{Error, Result};

static REGION_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the region code from a file's name
///
/// Pure function of the file name; no I/O. Fails with
/// [`Error::RegionUnresolvable`] when the stem carries no usable digits.
pub fn file_region(path: &Path, kind: DataKind) -> Result<Region> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let re = REGION_RE.get_or_init(|| Regex::new(REGION_STEM_PATTERN).expect("static pattern"));

    let region = re
        .find_iter(stem)
        .filter_map(|m| m.as_str().parse::<Region>().ok())
        .last()
        .ok_or_else(|| Error::region_unresolvable(path.to_string_lossy()))?;

    debug!("Resolved region {} for {} file '{}'", region, kind, stem);
    Ok(region)
}
