//! Onboarding TUI - Terminal User Interface for email ID creation
//!
//! A Ratatui-based form that collects franchise/employee onboarding details,
//! validates them as they are typed and logs the assembled record on submit.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::OnboardingConfig;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sink::LogSink;
use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = OnboardingConfig::load()?;
    let log_path = init_logging(&config)?;
    tracing::info!(?config, "starting onboarding form");

    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(LogSink));
    if let Some(path) = log_path {
        app.state.status_message = Some(format!("Logging to {}", path.display()));
    }
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("exiting: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Leave raw mode and the alternate screen before the default hook prints
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

/// Route logs to the configured file so they stay off the alternate screen.
/// Falls back to stderr when no log location is known.
fn init_logging(config: &OnboardingConfig) -> Result<Option<PathBuf>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "onboarding_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    let Some(path) = config.log_path() else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(Some(path))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
