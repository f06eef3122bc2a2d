//! Application constants for the utility processor
//!
//! This module contains the workbook layout constants, expected headline
//! texts, and file naming patterns used throughout the application.

// =============================================================================
// Workbook Layout
// =============================================================================

/// Sheet index holding the consumption data (headline + records)
pub const DATA_SHEET_INDEX: usize = 0;

/// Sheet index holding the region membership index in server files
pub const REGIONS_SHEET_INDEX: usize = 1;

/// Sheet name used when writing the data page of a server file
pub const DATA_SHEET_NAME: &str = "Data";

/// Sheet name used when writing the region index page of a server file
pub const REGIONS_SHEET_NAME: &str = "Regions";

/// Zero-based column positions shared by both data kinds
pub mod columns {
    /// Consumer group number (numeric)
    pub const GROUP: usize = 0;

    /// Street address (text)
    pub const ADDRESS: usize = 1;

    /// First meter reading: cold water or day tariff (numeric)
    pub const FIRST_READING: usize = 2;

    /// Second meter reading: hot water or night tariff (numeric)
    pub const SECOND_READING: usize = 3;

    /// Region code, present in server files only (numeric)
    pub const REGION: usize = 4;
}

// =============================================================================
// Headlines
// =============================================================================

/// Headline text expected in the first cell of a water workbook
pub const WATER_HEADLINE: &str = "Water consumption data";

/// Headline text expected in the first cell of an electricity workbook
pub const ELECTRICITY_HEADLINE: &str = "Electricity consumption data";

// =============================================================================
// File Naming
// =============================================================================

/// Pattern matching the region code embedded in a client file name.
/// The last match in the file stem wins, e.g. "water-region-7.xlsx" -> 7.
pub const REGION_STEM_PATTERN: &str = r"(\d+)";

/// Expected extension for consumption workbooks
pub const WORKBOOK_EXTENSION: &str = "xlsx";
