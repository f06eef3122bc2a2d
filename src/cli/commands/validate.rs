//! Validate command: parse a client file locally

use super::shared::{open_store, render_outcome, resolve_kind, CommandStatus};
use crate::app::services::workbook_parser::WorkbookParser;
use crate::cli::args::{Args, ValidateArgs};
use crate::Result;

/// Parse a client file without any server interaction and render the outcome
pub fn run_validate(args: &Args, cmd: &ValidateArgs) -> Result<CommandStatus> {
    let kind = resolve_kind(&cmd.local_file, cmd.kind)?;
    let (store, config) = open_store(args)?;
    let parser = WorkbookParser::new(kind, store, config);
    let outcome = parser.parse_client_local_file(&cmd.local_file);
    Ok(render_outcome(&outcome))
}
