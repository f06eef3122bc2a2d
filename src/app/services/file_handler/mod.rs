//! Server file handling: merging and deleting regions
//!
//! Builds on the workbook parser to rewrite the canonical server file:
//! merging a validated client region into it, or removing a region's rows
//! from it. The rewritten workbook always carries the data page first and
//! the region index page second.
//!
//! - [`handler`] - The merge/delete workflows over a server file store
//! - [`writer`] - Server workbook serialization

pub mod handler;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use handler::{DeleteReport, FileHandler, MergeReport};
