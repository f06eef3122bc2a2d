//! Core data structures for consumption workbook processing.
//!
//! Defines the data kinds, the typed consumption record produced by row
//! parsing, and the kind-specific meter readings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{ELECTRICITY_HEADLINE, WATER_HEADLINE};

/// Integer code identifying a geographic data partition within a file
pub type Region = u32;

/// Data kinds supported by the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataKind {
    Water,
    Electricity,
}

impl DataKind {
    /// Detect data kind from filename pattern
    pub fn from_path(path: &Path) -> Option<Self> {
        let path_str = path.to_string_lossy().to_lowercase();

        if path_str.contains("water") {
            Some(DataKind::Water)
        } else if path_str.contains("electricity") {
            Some(DataKind::Electricity)
        } else {
            None
        }
    }

    /// Detect data kind from a workbook headline
    ///
    /// Inverse of [`DataKind::headline`]; used to decide how to handle a
    /// server file when only its name is known (e.g. region deletion).
    pub fn from_headline(text: &str) -> Option<Self> {
        match text {
            WATER_HEADLINE => Some(DataKind::Water),
            ELECTRICITY_HEADLINE => Some(DataKind::Electricity),
            _ => None,
        }
    }

    /// Headline text expected in the first cell of this kind's workbooks
    pub fn headline(&self) -> &'static str {
        match self {
            DataKind::Water => WATER_HEADLINE,
            DataKind::Electricity => ELECTRICITY_HEADLINE,
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataKind::Water => write!(f, "water"),
            DataKind::Electricity => write!(f, "electricity"),
        }
    }
}

/// Kind-specific meter readings for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Readings {
    /// Cold and hot water meter readings
    Water { cold: f64, hot: f64 },
    /// Day and night tariff meter readings
    Electricity { day: f64, night: f64 },
}

impl Readings {
    /// The data kind these readings belong to
    pub fn kind(&self) -> DataKind {
        match self {
            Readings::Water { .. } => DataKind::Water,
            Readings::Electricity { .. } => DataKind::Electricity,
        }
    }
}

/// One consumer's data for one region, produced by row parsing
///
/// Immutable once built; owned by the result of a single parse call and
/// never retained across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// Region the record belongs to
    pub region: Region,

    /// Consumer group number
    pub group: u32,

    /// Street address of the metered building
    pub address: String,

    /// Kind-specific meter readings
    pub readings: Readings,
}

impl ConsumptionRecord {
    /// Create a new record
    pub fn new(region: Region, group: u32, address: impl Into<String>, readings: Readings) -> Self {
        Self {
            region,
            group,
            address: address.into(),
            readings,
        }
    }

    /// The data kind of this record
    pub fn kind(&self) -> DataKind {
        self.readings.kind()
    }
}
