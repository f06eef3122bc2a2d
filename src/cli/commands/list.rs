//! List command: show available server file names

use super::shared::{open_store, CommandStatus};
use crate::cli::args::Args;
use crate::Result;

/// Print the server file names available in the store
pub fn run_list(args: &Args) -> Result<CommandStatus> {
    let (store, _) = open_store(args)?;
    let names = store.list()?;
    if names.is_empty() {
        println!("(no server files)");
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(CommandStatus::Completed)
}
