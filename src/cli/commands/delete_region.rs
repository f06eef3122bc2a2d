//! Delete-region command: remove a region's rows from a server file

use colored::Colorize;

use super::shared::{format_regions, open_store, spinner, CommandStatus};
use crate::app::services::file_handler::FileHandler;
use crate::cli::args::{Args, DeleteRegionArgs};
use crate::Result;

/// Delete the region from the server file and report what is left
pub fn run_delete_region(args: &Args, cmd: &DeleteRegionArgs) -> Result<CommandStatus> {
    let (store, config) = open_store(args)?;
    let handler = FileHandler::new(store, config);

    let pb = spinner(&format!(
        "Deleting region {} from '{}'",
        cmd.region, cmd.server_file
    ));
    let report = handler.delete_region(&cmd.server_file, cmd.region);
    pb.finish_and_clear();

    let report = report?;
    println!(
        "{} deleted region {} ({} records) from '{}'",
        "ok:".green().bold(),
        report.region,
        report.removed_records,
        report.server_file
    );
    println!(
        "server file now holds {} records across regions: {}",
        report.remaining_records,
        format_regions(&report.regions)
    );
    Ok(CommandStatus::Completed)
}
