//! Check command: validate a client file against a server file

use super::shared::{open_store, render_outcome, resolve_kind, spinner, CommandStatus};
use crate::app::services::workbook_parser::WorkbookParser;
use crate::cli::args::{Args, CheckArgs};
use crate::Result;

/// Run the headline-checked server parse and render the outcome
pub fn run_check(args: &Args, cmd: &CheckArgs) -> Result<CommandStatus> {
    let kind = resolve_kind(&cmd.local_file, cmd.kind)?;
    let (store, config) = open_store(args)?;
    let parser = WorkbookParser::new(kind, store, config);

    let pb = spinner(&format!("Checking against server file '{}'", cmd.server_file));
    let outcome = parser.parse_server_file_with_headlines_check(&cmd.server_file, &cmd.local_file);
    pb.finish_and_clear();

    Ok(render_outcome(&outcome))
}
