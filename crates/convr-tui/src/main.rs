//! convr TUI - Terminal User Interface for the convr currency converter

mod app;
mod config;
mod log;
mod popups;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use clap::Parser;
use config::Startup;
use directories::ProjectDirs;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON rates file: [{"code": "EUR", "name": "Euro", "flag": "🇪🇺", "rate": 0.92}, ...]
    #[arg(short, long, value_name = "FILE")]
    rates: Option<PathBuf>,

    /// Initial source currency
    #[arg(short, long, value_name = "CODE")]
    from: Option<String>,

    /// Initial target currency
    #[arg(short, long, value_name = "CODE")]
    to: Option<String>,

    /// Initial amount
    #[arg(short, long, value_name = "AMOUNT")]
    amount: Option<String>,

    /// Log file (defaults to convr.log in the platform data directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse args
    let args = Args::parse();
    let dirs = ProjectDirs::from("com", "convr", "convr");

    let log_file = args.log_file.clone().or_else(|| {
        dirs.as_ref()
            .map(|d| d.data_local_dir().join("convr.log"))
    });
    if let Some(path) = &log_file {
        // The UI is still usable without a log file
        if let Err(err) = log::init_logging(path, if args.verbose { "debug" } else { "info" }) {
            eprintln!("Warning: logging disabled: {err:#}");
        }
    }

    // Resolve rates and start-up state before touching the terminal
    let startup = Startup {
        rates: args.rates,
        from: args.from,
        to: args.to,
        amount: args.amount,
    };
    let (table, origin) =
        config::load_rate_table(startup.rates.as_deref(), dirs.as_ref().map(|d| d.config_dir()))?;
    let converter = config::build_converter(table, &startup)?;
    let mut app = App::new(converter, origin);
    info!(
        source = %app.converter.source(),
        target = %app.converter.target(),
        "starting"
    );

    enable_raw_mode()?;
    restore_after(run_in_terminal(&mut app), disable_raw_mode)
}

/// Run the UI on the alternate screen, leaving it even when setup fails
fn run_in_terminal(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let res = run_app(&mut terminal, app);
            restore_after(res, || terminal.show_cursor())
        });
    restore_after(res, || execute!(stdout, LeaveAlternateScreen))
}

/// Always run `restore`; an error from `res` takes precedence over its own
fn restore_after<T>(res: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        app.clear_status_if_expired();

        // Poll for events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            info!("quit");
            return Ok(());
        }
    }
}
