//! tiercalc - Main entry point
//!
//! Interactive credit calculator by default, with headless subcommands for
//! scripting and catalog maintenance.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use tiercalc::app::{run_then_restore, App};
use tiercalc::catalog::Catalog;
use tiercalc::cli::{Cli, Commands};
use tiercalc::error::CalcError;
use tiercalc::report;
use tiercalc::session::Calculator;
use tiercalc::types::OutputFormat;

/// Initialize tracing.
///
/// `RUST_LOG` always wins. Otherwise logs go to `log_file` at info level, or
/// to stderr at warn level for headless commands. The interactive UI stays
/// silent without a log file so the alternate screen is not overwritten.
fn init_logger(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default_level = match (log_file, interactive) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.log_file.as_deref(), cli.is_interactive())?;
    info!("tiercalc starting up");
    debug!(?cli, "CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { path }) => {
            info!("Validating catalog file: {:?}", path);
            match Catalog::load_validated(&path) {
                Ok(catalog) => {
                    println!(
                        "✓ Catalog is valid: {} activities, {} tiers, {} presets",
                        catalog.activities.len(),
                        catalog.tiers.len(),
                        catalog.presets.len()
                    );
                }
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Export { path }) => {
            Catalog::default().save_to_file(&path)?;
            info!("Default catalog written to {:?}", path);
            println!("✓ Default catalog written to {}", path.display());
        }
        Some(Commands::Catalog) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            println!("{}", report::render_catalog(&catalog));
        }
        Some(Commands::Summary {
            select,
            preset,
            format,
        }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            print_summary(catalog, preset.as_deref(), &select, format)?;
        }
        Some(Commands::Tui) | None => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            run_tui(catalog)?;
        }
    }

    Ok(())
}

/// Load the catalog from `path`, or fall back to the built-in one
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_validated(path)?;
            info!(
                "Catalog loaded from {:?}: {} activities, {} tiers",
                path,
                catalog.activities.len(),
                catalog.tiers.len()
            );
            Ok(catalog)
        }
        None => {
            debug!("Using built-in catalog");
            Ok(Catalog::default())
        }
    }
}

/// Headless summary for a preset and/or explicit ids
fn print_summary(
    catalog: Catalog,
    preset: Option<&str>,
    select: &[String],
    format: OutputFormat,
) -> Result<()> {
    let mut calculator = Calculator::new(catalog);
    if let Some(name) = preset {
        calculator.load_preset(name)?;
    }
    for id in select {
        if calculator.catalog().activity(id).is_none() {
            warn!("Activity {:?} is not in the catalog and counts as 0 credits", id);
        }
        calculator.select(id);
    }

    let output = report::render(
        calculator.catalog(),
        calculator.selection(),
        calculator.summary(),
        format,
    )?;
    println!("{}", output);
    Ok(())
}

/// Run the interactive calculator
fn run_tui(catalog: Catalog) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().map_err(|e| CalcError::terminal(format!("Failed to enable raw mode: {}", e)))?;

    let result = run_then_restore(
        || {
            crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(
                |e| CalcError::terminal(format!("Failed to enter alternate screen: {}", e)),
            )?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))
                .map_err(|e| CalcError::terminal(format!("Failed to create terminal: {}", e)))?;
            App::new(catalog).run(&mut terminal)
        },
        restore_terminal,
    );

    result.map_err(Into::into)
}

/// Leave raw mode and the alternate screen, logging rather than failing
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen) {
        warn!("Failed to leave alternate screen: {}", e);
    }
}
