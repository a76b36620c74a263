// algotrace: step-by-step replay of sorting and searching algorithms

mod cli;
mod commands;

use std::io::{self, IsTerminal};

use algotrace::logging::{init_logging, LogConfig};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::{load_replay, print_catalog, run_trace, run_tui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The replay owns the terminal, so it may only log to a file
    let interactive = match &cli.command {
        Command::Run(args) => !args.json,
        Command::Replay(_) => true,
        Command::List { .. } => false,
    };
    if !interactive || cli.log_file.is_some() {
        let mut log_config = LogConfig::from_verbosity(cli.verbose)
            .with_format(cli.log_format.into())
            .with_timestamps(cli.log_timestamps)
            .with_ansi(io::stderr().is_terminal())
            .with_log_file(cli.log_file.clone());
        if let Some(level) = cli.log_level {
            log_config = log_config.with_level(level.into());
        }
        if let Err(error) = init_logging(&log_config) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Run(args) => match run_trace(&args) {
            Ok(report) if args.json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(report) => {
                let res = run_tui(report.sequence, args.interval_ms);
                if let Err(err) = res {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            }
            Err(error) if args.json => {
                println!("{}", serde_json::to_string_pretty(&error.report())?);
                std::process::exit(1);
            }
            Err(error) => {
                eprintln!("Error: {}", error.user_message());
                std::process::exit(1);
            }
        },
        Command::Replay(args) => {
            let sequence = match load_replay(&args.file) {
                Ok(sequence) => sequence,
                Err(error) => {
                    eprintln!("Error: {}", error);
                    std::process::exit(1);
                }
            };
            if let Err(err) = run_tui(sequence, args.interval_ms) {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        Command::List { json } => print_catalog(json)?,
    }

    Ok(())
}
