//! Command implementations for the utility processor CLI
//!
//! Each subcommand lives in its own module; this module dispatches and
//! re-exports the shared command status used for process exit codes.

pub mod check;
pub mod delete_region;
pub mod import;
pub mod list;
pub mod regions;
pub mod shared;
pub mod validate;

pub use shared::{setup_logging, CommandStatus};

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Dispatch the parsed CLI arguments to their subcommand handler
pub fn run(args: Args) -> Result<CommandStatus> {
    match args.command.clone() {
        Commands::Validate(cmd) => validate::run_validate(&args, &cmd),
        Commands::Check(cmd) => check::run_check(&args, &cmd),
        Commands::Import(cmd) => import::run_import(&args, &cmd),
        Commands::Regions(cmd) => regions::run_regions(&args, &cmd),
        Commands::DeleteRegion(cmd) => delete_region::run_delete_region(&args, &cmd),
        Commands::List => list::run_list(&args),
    }
}
