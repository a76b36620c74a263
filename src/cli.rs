//! CLI argument definitions for algotrace.

use std::path::PathBuf;

use algotrace::algorithms::constants::DEFAULT_INTERVAL_MS;
use algotrace::logging::LogFormat;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "algotrace",
    version,
    about = "Step-by-step replay of sorting and searching algorithms",
    long_about = "Record every comparison, swap and search-window change an algorithm makes,\n\
                  then replay the steps in the terminal or print them as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit log level (overrides -v flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    ///
    /// The interactive replay only logs when this is set.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Trace an algorithm over an array and replay it.
    Run(RunArgs),

    /// Replay a step sequence previously saved with `run --json`.
    Replay(ReplayArgs),

    /// List every algorithm with its complexity.
    List {
        /// Print the catalog as JSON.
        #[arg(long = "json")]
        json: bool,
    },
}

#[derive(Parser)]
pub struct RunArgs {
    /// Algorithm name: bubble, merge, quick, linear or binary (case-insensitive).
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: String,

    /// Comma-separated integers, e.g. "5,2,8,1,9".
    #[arg(short = 'a', long = "array", value_name = "CSV", allow_hyphen_values = true)]
    pub array: String,

    /// Value to look for (linear and binary search only).
    #[arg(short = 't', long = "target", value_name = "N", allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Milliseconds between steps while playing.
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print the full execution report as JSON instead of opening the replay.
    #[arg(long = "json")]
    pub json: bool,

    /// Search the array as given instead of sorting it before a binary search.
    #[arg(long = "no-sort")]
    pub no_sort: bool,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// JSON file holding a step sequence or an execution report.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Milliseconds between steps while playing.
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_accepts_negative_values() {
        let cli = Cli::parse_from([
            "algotrace", "run", "binary", "--array", "-3,-1,4", "--target", "-1", "--json",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.array, "-3,-1,4");
        assert_eq!(args.target.as_deref(), Some("-1"));
        assert!(args.json);
        assert_eq!(args.interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["algotrace", "list", "-vv", "--log-format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Command::List { json: false }));
        assert!(cli.log_level.is_none());
        assert!(!cli.log_timestamps);
    }

    #[test]
    fn test_log_level_and_timestamps() {
        let cli = Cli::parse_from(["algotrace", "--log-level", "trace", "--log-timestamps", "list"]);
        assert_eq!(cli.log_level.map(Level::from), Some(Level::TRACE));
        assert!(cli.log_timestamps);
    }
}
