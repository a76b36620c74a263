//! Subcommand implementations.

use std::error::Error;
use std::fs;
use std::io;
use std::panic;
use std::path::Path;

use algotrace::algorithms::catalog::AlgorithmKind;
use algotrace::algorithms::errors::EngineError;
use algotrace::algorithms::request::{
    execute_request, ArrayInput, EngineConfig, ExecutionReport, ExecutionRequest,
};
use algotrace::snapshot::StepSequence;
use algotrace::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::Value;
use tracing::info;

use crate::cli::RunArgs;

/// Validate the arguments and record the algorithm's steps
pub fn run_trace(args: &RunArgs) -> Result<ExecutionReport, EngineError> {
    let config = EngineConfig {
        sort_binary_input: !args.no_sort,
        ..EngineConfig::default()
    };
    let request = ExecutionRequest::new(
        args.algorithm.as_str(),
        ArrayInput::Text(args.array.clone()),
        args.target.clone().map(Value::String),
    );
    let report = execute_request(&request, &config)?;
    info!(
        algorithm = report.sequence.algorithm().as_str(),
        steps = report.step_count,
        total_time_ms = report.total_time_ms,
        "trace recorded"
    );
    Ok(report)
}

/// Read a saved sequence; the file passes the same checks as a fresh recording
pub fn load_replay(path: &Path) -> Result<StepSequence, Box<dyn Error>> {
    let body = fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    let sequence: StepSequence = serde_json::from_str(&body)
        .map_err(|e| format!("'{}' is not a valid step sequence: {}", path.display(), e))?;
    info!(
        algorithm = sequence.algorithm().as_str(),
        steps = sequence.len(),
        "replay loaded"
    );
    Ok(sequence)
}

/// Print the algorithm catalog
pub fn print_catalog(json: bool) -> Result<(), Box<dyn Error>> {
    let infos: Vec<_> = AlgorithmKind::ALL.iter().map(|k| k.info()).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{:<8} {:<14} {:<10} {:<40} {:<6}", "NAME", "ALGORITHM", "CATEGORY", "TIME", "STABLE");
    for info in infos {
        println!(
            "{:<8} {:<14} {:<10} {:<40} {:<6}",
            info.kind.as_str(),
            info.name,
            format!("{:?}", info.category).to_lowercase(),
            info.complexity_summary(),
            if info.stable { "yes" } else { "no" },
        );
    }
    Ok(())
}

/// Take over the terminal and replay `sequence` until the user quits
pub fn run_tui(sequence: StepSequence, interval_ms: u64) -> io::Result<()> {
    // Give the terminal back before any panic message is printed
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(sequence, interval_ms);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
