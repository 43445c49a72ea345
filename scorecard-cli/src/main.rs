//! Scorecard CLI - Terminal-based corpus rating tool

mod io;
mod ui;

use std::fs::{File, OpenOptions};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use scorecard_core::{load_corpus, Action, App, Effect, Key, ListView};

use crate::io::Fetcher;

#[derive(Parser, Debug)]
#[command(name = "scorecard", version)]
#[command(about = "Rate each record of a text corpus 1-5 and copy the scores in row order")]
struct Cli {
    /// CSV to load at startup: an http(s) URL or a file path
    location: Option<String>,

    /// Timeout for HTTP retrieval, in seconds
    #[arg(long, env = "SCORECARD_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the export to stdout after the terminal is restored
    #[arg(long)]
    print_on_exit: bool,

    /// Format used by --print-on-exit
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Log file [default: ~/.scorecard/scorecard.log]
    #[arg(long, env = "SCORECARD_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// One score per line, blank for unrated
    Text,
    /// Text, unrated ids and per-row ratings as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone());

    let fetcher = Fetcher::new(Duration::from_secs(cli.timeout_secs));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();
    let mut view = ListView::default();

    // Load location if provided
    let res = match &cli.location {
        Some(location) => {
            let effect = app.request_load(location);
            run_effect(&mut terminal, &mut app, &mut view, &fetcher, effect)
        }
        None => {
            app.set_status("No corpus loaded. Press o to open one.");
            Ok(())
        }
    };

    // Main loop
    let res = res.and_then(|()| run_app(&mut terminal, &mut app, &mut view, &fetcher));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        tracing::error!(error = %e, "terminal loop failed");
        eprintln!("Error: {}", e);
    }

    if cli.print_on_exit {
        print_export(&app, cli.format)?;
    }

    Ok(())
}

fn init_logging(log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_env("SCORECARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(log_writer(log_file))
        .init();
}

/// Log file writer, or a discarding sink when the file cannot be opened
fn log_writer(log_file: Option<PathBuf>) -> BoxMakeWriter {
    match open_log_file(log_file) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            BoxMakeWriter::new(std::io::sink)
        }
    }
}

fn open_log_file(log_file: Option<PathBuf>) -> Result<File> {
    let path = match log_file {
        Some(path) => path,
        None => io::default_log_path()?,
    };
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    view: &mut ListView,
    fetcher: &Fetcher,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app, view))?;

        let effect = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Clear status on any key
                app.clear_status();
                app.handle_key(to_key(key.code))
            }
            Event::Mouse(mouse) => handle_mouse(app, view, mouse),
            _ => Effect::None,
        };

        run_effect(terminal, app, view, fetcher, effect)?;
    }
    Ok(())
}

fn run_effect<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    view: &mut ListView,
    fetcher: &Fetcher,
    effect: Effect,
) -> Result<()> {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::ScrollTo(index) => view.scroll_into_view(index),
        Effect::Copy(text) => {
            let lines = app.export().map(|e| e.ratings.len()).unwrap_or(0);
            match io::copy_to_clipboard(&text) {
                Ok(()) => app.set_status(&format!("Copied {} lines to clipboard", lines)),
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    app.set_status(&format!("Clipboard error: {}", e));
                }
            }
        }
        Effect::Load(location) => {
            // Show the loading state before blocking on retrieval
            terminal.draw(|f| ui::draw(f, app, view))?;
            let result = load_corpus(fetcher, &location);
            if result.is_ok() {
                view.reset();
            }
            app.finish_load(result);
        }
    }
    Ok(())
}

fn handle_mouse(app: &mut App, view: &ListView, mouse: MouseEvent) -> Effect {
    let len = app.session.as_ref().map(|s| s.len()).unwrap_or(0);
    let Some(hit) = view.hit(mouse.column, mouse.row, len) else {
        return Effect::None;
    };

    match mouse.kind {
        MouseEventKind::Moved => {
            app.hover(hit.index);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.hover(hit.index);
            if let Some(rating) = hit.rating {
                app.rate(hit.index, rating);
            }
        }
        MouseEventKind::ScrollDown => return app.apply(Action::FocusNext),
        MouseEventKind::ScrollUp => return app.apply(Action::FocusPrev),
        _ => {}
    }
    Effect::None
}

fn to_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    }
}

fn print_export(app: &App, format: ExportFormat) -> Result<()> {
    let Some(export) = app.export() else {
        return Ok(());
    };
    match format {
        ExportFormat::Text => println!("{}", export.text),
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&export).context("Failed to serialize export")?;
            println!("{}", json);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scorecard.log");
        assert!(open_log_file(Some(path.clone())).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_unopenable_log_file_falls_back_to_sink() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log_file(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open log file"));

        // A directory cannot be opened for append; the writer still works
        let writer = log_writer(Some(dir.path().to_path_buf()));
        let mut sink = tracing_subscriber::fmt::MakeWriter::make_writer(&writer);
        assert!(std::io::Write::write_all(&mut sink, b"discarded").is_ok());
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(to_key(KeyCode::Char('a')), Key::Char('a'));
        assert_eq!(to_key(KeyCode::Home), Key::Home);
        assert_eq!(to_key(KeyCode::Tab), Key::Other);
    }
}
