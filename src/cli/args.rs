//! Command-line argument definitions for the utility processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each window of the original desktop workflow maps to a
//! subcommand: validating a client file, checking it against the server
//! file, importing it, and inspecting or deleting server-side regions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::models::{DataKind, Region};

/// CLI arguments for the utility consumption processor
///
/// Validates client water/electricity consumption workbooks against a
/// canonical server workbook, merges new regions into it, and deletes
/// regions from it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "utility-processor",
    version,
    about = "Validate and merge regional utility consumption workbooks",
    long_about = "Validates client water/electricity consumption workbooks against a canonical \
                  server workbook, merges new regional data into the server copy, and supports \
                  deleting a region's data from the server file."
)]
pub struct Args {
    /// Root directory of the server file store
    #[arg(
        long = "store",
        value_name = "PATH",
        global = true,
        default_value = "./server-files",
        help = "Root directory of the server file store"
    )]
    pub store: PathBuf,

    /// Treat a missing/malformed region index page as "no regions recorded"
    ///
    /// By default an unreadable region index is a hard failure, because
    /// duplicate detection cannot be guaranteed without it.
    #[arg(
        long = "permissive-index",
        global = true,
        help = "Treat an unreadable region index page as empty"
    )]
    pub permissive_index: bool,

    /// Log level for diagnostic output (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        default_value = "warn",
        help = "Log level for diagnostic output"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a client file locally without touching the server
    Validate(ValidateArgs),
    /// Check a client file against a server file (headline + duplicate region)
    Check(CheckArgs),
    /// Merge a client file's region into a server file
    Import(ImportArgs),
    /// List the regions recorded in a server file
    Regions(RegionsArgs),
    /// Delete a region's rows from a server file
    DeleteRegion(DeleteRegionArgs),
    /// List available server file names
    List,
}

/// Data kind selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Water,
    Electricity,
}

impl From<KindArg> for DataKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Water => DataKind::Water,
            KindArg::Electricity => DataKind::Electricity,
        }
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Client consumption workbook to parse
    #[arg(value_name = "FILE")]
    pub local_file: PathBuf,

    /// Data kind of the file; detected from the file name when omitted
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Client consumption workbook to check
    #[arg(value_name = "FILE")]
    pub local_file: PathBuf,

    /// Server file to check against
    #[arg(long = "server-file", value_name = "NAME")]
    pub server_file: String,

    /// Data kind of the file; detected from the file name when omitted
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Client consumption workbook to import
    #[arg(value_name = "FILE")]
    pub local_file: PathBuf,

    /// Server file to merge into
    #[arg(long = "server-file", value_name = "NAME")]
    pub server_file: String,

    /// Data kind of the file; detected from the file name when omitted
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,
}

/// Arguments for the regions command
#[derive(Debug, Clone, Parser)]
pub struct RegionsArgs {
    /// Server file to inspect
    #[arg(long = "server-file", value_name = "NAME")]
    pub server_file: String,
}

/// Arguments for the delete-region command
#[derive(Debug, Clone, Parser)]
pub struct DeleteRegionArgs {
    /// Server file to rewrite
    #[arg(long = "server-file", value_name = "NAME")]
    pub server_file: String,

    /// Region code to delete
    #[arg(long, value_name = "REGION")]
    pub region: Region,
}
