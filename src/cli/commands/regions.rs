//! Regions command: list the regions recorded in a server file

use super::shared::{format_regions, open_store, spinner, CommandStatus};
use crate::app::services::file_handler::FileHandler;
use crate::cli::args::{Args, RegionsArgs};
use crate::Result;

/// Print the region index of a server file
pub fn run_regions(args: &Args, cmd: &RegionsArgs) -> Result<CommandStatus> {
    let (store, config) = open_store(args)?;
    let handler = FileHandler::new(store, config);

    let pb = spinner(&format!("Reading regions of '{}'", cmd.server_file));
    let regions = handler.server_regions(&cmd.server_file);
    pb.finish_and_clear();

    let regions = regions?;
    println!("{}: {}", cmd.server_file, format_regions(&regions));
    Ok(CommandStatus::Completed)
}
