//! Import command: merge a client region into a server file

use colored::Colorize;

use super::shared::{format_regions, open_store, resolve_kind, spinner, CommandStatus};
use crate::app::services::file_handler::FileHandler;
use crate::cli::args::{Args, ImportArgs};
use crate::Result;

/// Merge the client file's region into the server file
pub fn run_import(args: &Args, cmd: &ImportArgs) -> Result<CommandStatus> {
    let kind = resolve_kind(&cmd.local_file, cmd.kind)?;
    let (store, config) = open_store(args)?;
    let handler = FileHandler::new(store, config);

    let pb = spinner(&format!("Importing into server file '{}'", cmd.server_file));
    let report = handler.merge_region(kind, &cmd.server_file, &cmd.local_file);
    pb.finish_and_clear();

    let report = report?;
    println!(
        "{} merged region {} ({} records) into '{}'",
        "ok:".green().bold(),
        report.region,
        report.merged_records,
        report.server_file
    );
    println!(
        "server file now holds {} records across regions: {}",
        report.total_records,
        format_regions(&report.regions)
    );
    Ok(CommandStatus::Completed)
}
