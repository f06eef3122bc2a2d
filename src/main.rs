use clap::Parser;
use std::process;
use utility_processor::cli::{args::Args, commands};
use utility_processor::cli::commands::CommandStatus;

fn main() {
    let args = Args::parse();

    if let Err(e) = commands::setup_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    match commands::run(args) {
        Ok(CommandStatus::Completed) => process::exit(0),
        // The file was rejected by a validation gate, not by a fault
        Ok(CommandStatus::Rejected) => process::exit(2),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
