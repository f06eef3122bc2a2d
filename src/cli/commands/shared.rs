//! Shared helpers for CLI commands
//!
//! Logging setup, outcome rendering, spinner helpers and store
//! construction used by every subcommand.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::app::adapters::store::{open_dir_store, RemoteStore};
use crate::app::models::DataKind;
use crate::app::services::workbook_parser::ParseOutcome;
use crate::cli::args::{Args, KindArg};
use crate::{Error, HandlerConfig, Result};

/// How a command finished, for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The operation ran and succeeded
    Completed,
    /// The operation ran but the file was rejected (headline mismatch,
    /// duplicate region, cell error)
    Rejected,
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("utility_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the store and handler config from the global arguments
pub fn open_store(args: &Args) -> Result<(Arc<dyn RemoteStore>, HandlerConfig)> {
    let store = open_dir_store(&args.store)?;
    let config = HandlerConfig::default()
        .with_store_root(&args.store)
        .with_permissive_region_index(args.permissive_index);
    Ok((Arc::new(store), config))
}

/// Resolve the data kind from the flag or the file name
pub fn resolve_kind(path: &std::path::Path, flag: Option<KindArg>) -> Result<DataKind> {
    if let Some(kind) = flag {
        return Ok(kind.into());
    }
    DataKind::from_path(path).ok_or_else(|| {
        Error::configuration(format!(
            "cannot detect data kind from '{}'; pass --kind water|electricity",
            path.display()
        ))
    })
}

/// Spinner shown while a server file is fetched and parsed
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Render a parse outcome and report how the command finished
pub fn render_outcome(outcome: &ParseOutcome) -> CommandStatus {
    match outcome {
        ParseOutcome::Success {
            records,
            server_regions,
        } => {
            println!(
                "{} {}",
                "ok:".green().bold(),
                format!("parsed {} records", records.len())
            );
            if let Some(regions) = server_regions {
                println!("server regions: {}", format_regions(regions));
            }
            CommandStatus::Completed
        }
        ParseOutcome::HeadlineMismatch => {
            println!(
                "{} {}",
                "rejected:".red().bold(),
                "the file headline does not match the server file"
            );
            CommandStatus::Rejected
        }
        ParseOutcome::DuplicateRegion { region } => {
            println!(
                "{} {}",
                "rejected:".red().bold(),
                format!("region {} already exists in the server file", region)
            );
            CommandStatus::Rejected
        }
        ParseOutcome::CellError { cell } => {
            println!(
                "{} {}",
                "rejected:".red().bold(),
                format!("cell '{}' could not be parsed, fix it and retry", cell)
            );
            CommandStatus::Rejected
        }
        ParseOutcome::Failed { message } => {
            println!("{} {}", "failed:".red().bold(), message);
            CommandStatus::Rejected
        }
    }
}

/// Comma-separated region list for display
pub fn format_regions(regions: &std::collections::BTreeSet<u32>) -> String {
    if regions.is_empty() {
        return "(none)".to_string();
    }
    regions
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
