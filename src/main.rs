//! PaperDesk - navigation shell
//!
//! Terminal front end for the research-paper library: browse pages, switch
//! roles through the dashboards, and watch notifications come and go.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use paperdesk::application::{App, AppMode};
use paperdesk::infrastructure::{Settings, init_logging};
use paperdesk::presentation::{InputHandler, render_ui};

#[derive(Debug, Parser)]
#[command(name = "paperdesk", about = "Navigation shell for a research-paper library")]
struct Args {
    /// Settings file (defaults to ./paperdesk.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to open on start
    #[arg(long)]
    start: Option<String>,
    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    if let Some(start) = args.start {
        settings.start_path = start;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    init_logging(&settings.log_filter, settings.log_file.as_deref())
        .context("failed to initialize logging")?;
    tracing::info!(?settings, "starting paperdesk");

    let mut app = App::new(settings.toast_ttl());
    if settings.start_path != "/" {
        app.navigate(&settings.start_path);
    }
    let input = InputHandler::new(settings.snapshot_file.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &input, settings.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    res.context("terminal error")
}

/// Main application event loop.
///
/// Waits for input until the next toast deadline or the tick rate, whichever
/// is sooner, then runs any expiry that has come due. Returns when the user
/// presses 'q' in browse mode.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    input: &InputHandler,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(tick_rate, |until| until.min(tick_rate));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, AppMode::Browse) => return Ok(()),
                        _ => input.handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }

        app.tick();
    }
}
