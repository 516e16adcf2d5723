//! Admission Lookup - a terminal front end for the college admission API.
//!
//! Shows selected-student statistics, looks up a roll number's admission
//! result and displays the per-department fee structure. Run without
//! arguments for the interactive page, or with `--stats`, `--search <roll>`
//! or `--fees` to print a single rendered view.

mod api;
mod app;
mod config;
mod controller;
mod models;
mod page;
mod ui;
mod utils;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::ApiClient;
use app::App;
use config::Config;
use controller::PageController;
use page::{Document, ElementId};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const LOG_FILE: &str = "admission-lookup.log";

const USAGE: &str = "\
Usage: admission-lookup [COMMAND]

Without a command, opens the interactive lookup page.

Commands:
  --stats          Print the statistics panel
  --search <roll>  Look up a roll number and print the result panel
  --fees           Print the fee structure table
  --help           Show this message

Environment:
  ADMISSION_API_URL  Base URL of the admission API
  RUST_LOG           Log filter (default: warn)";

/// Headless commands selected on the command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Interactive,
    Stats,
    Search(String),
    Fees,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [] => Ok(Command::Interactive),
        [flag] if flag == "--stats" => Ok(Command::Stats),
        [flag] if flag == "--fees" => Ok(Command::Fees),
        [flag] if flag == "--help" || flag == "-h" => Ok(Command::Help),
        [flag, roll] if flag == "--search" => Ok(Command::Search(roll.clone())),
        [flag] if flag == "--search" => anyhow::bail!("--search needs a roll number"),
        _ => anyhow::bail!("Unrecognized arguments: {}\n\n{}", args.join(" "), USAGE),
    }
}

fn env_filter() -> EnvFilter {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr for the headless commands.
fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter())
        .init();
}

/// Log to a file while the terminal is in raw mode. The guard must live
/// until exit so buffered lines are flushed.
fn init_file_tracing() -> Result<WorkerGuard> {
    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter())
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    if command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    if command != Command::Interactive {
        init_stderr_tracing();
        return run_headless(command, Config::load()).await;
    }

    let _guard = init_file_tracing()?;
    let config = Config::load();
    info!("Admission lookup starting");

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Admission lookup shutting down");
    Ok(())
}

/// Run one controller operation against an in-memory page and print the
/// container it rendered.
async fn run_headless(command: Command, config: Config) -> Result<()> {
    let api = ApiClient::new(&config)?;
    let mut controller = PageController::new(Document::new(), config.notices.clone());

    let container = match command {
        Command::Stats => {
            controller.fetch_stats(&api).await;
            ElementId::StatsContent
        }
        Command::Search(roll) => {
            controller.page_mut().set_roll_input(roll);
            controller.search(&api).await;
            ElementId::ResultContent
        }
        Command::Fees => {
            controller.fetch_admission_info(&api).await;
            controller.show_fee_structure();
            ElementId::FeeContent
        }
        Command::Interactive | Command::Help => return Ok(()),
    };

    if let Some(alert) = controller.page().pending_alert() {
        anyhow::bail!("{}", alert);
    }

    println!("{}", controller.page().content_html(container));
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            app.viewport = f.area();
            render(f, app);
        })?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if handle_input(app, event::read()?) {
                app.quitting = true;
            }
        }

        // Check for completed background tasks
        app.check_background_tasks();

        if app.quitting {
            return Ok(());
        }
    }
}
