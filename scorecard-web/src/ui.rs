//! Terminal UI rendering for scorecard Web
//!
//! This module mirrors scorecard-cli's UI but uses ratzilla's rendering.

use ratzilla::ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use scorecard_core::keymap::bindings;
use scorecard_core::layout::{Area, CARD_HEIGHT, STAR_INDENT};
use scorecard_core::{App, CorpusRecord, ListView, Mode, Rating, Session};

// Catppuccin Mocha colors
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const SURFACE1: Color = Color::Rgb(69, 71, 90);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const RED: Color = Color::Rgb(243, 139, 168);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const GREEN: Color = Color::Rgb(166, 227, 161);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);

pub fn draw(frame: &mut Frame, app: &App, view: &mut ListView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Records
            Constraint::Length(4), // Export pane
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    match &app.session {
        Some(session) => draw_records(frame, session, view, chunks[1]),
        None => {
            view.set_area(Area::default(), 0);
            frame.render_widget(Block::default().borders(Borders::ALL), chunks[1]);
        }
    }
    draw_export(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Draw popups/overlays
    match app.mode {
        Mode::Input => draw_input_dialog(frame, app),
        Mode::Help => draw_help(frame),
        Mode::Normal => {}
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (rated, total) = app.progress();
    let loading = if app.load.is_loading() { " Loading..." } else { "" };

    let title_text = format!(
        " Scorecard (Web) - {} [{}/{}]{}",
        app.title(),
        rated,
        total,
        loading
    );

    let title_bar = Paragraph::new(title_text)
        .style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_records(frame: &mut Frame, session: &Session, view: &mut ListView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title(format!("Records ({})", session.len()));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    view.set_area(Area::new(inner.x, inner.y, inner.width, inner.height), session.len());

    if session.is_empty() {
        let empty = Paragraph::new("No records with a string id and text")
            .style(Style::default().fg(SUBTEXT0));
        frame.render_widget(empty, inner);
        return;
    }

    // Cards sit at fixed rows so pointer hits line up with what is drawn
    for (slot, index) in view.visible_range(session.len()).enumerate() {
        let y = inner.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.y + inner.height - y);
        let record = &session.records()[index];

        let style = if session.focus() == Some(index) {
            Style::default().fg(TEXT).bg(SURFACE1)
        } else {
            Style::default().fg(TEXT)
        };

        let meta = format!("Row: {}, ID: {}", CorpusRecord::row_number(index), record.id);
        let card = Paragraph::new(vec![
            Line::from(Span::styled(meta, Style::default().fg(SUBTEXT0))),
            Line::from(record.text.replace('\n', " ")),
            stars_line(session.rating_at(index)),
        ])
        .style(style);

        frame.render_widget(card, Rect::new(inner.x, y, inner.width, height));
    }
}

fn stars_line(rating: Option<Rating>) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(usize::from(STAR_INDENT)))];
    for level in Rating::all() {
        let filled = rating.is_some_and(|r| level <= r);
        let (glyph, color) = if filled { ("★", YELLOW) } else { ("☆", SUBTEXT0) };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn draw_export(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MAUVE))
        .title("Export (y: copy)");

    let line = match app.export().map(|e| e.warning()) {
        Some(Some(warning)) => Line::from(Span::styled(warning, Style::default().fg(YELLOW))),
        Some(None) => Line::from(Span::styled("All records rated", Style::default().fg(GREEN))),
        None => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Input => "INPUT",
        Mode::Help => "HELP",
    };

    let help_hint = "j/k move | asdfg rate | y copy | o load | ? help";

    let (status, color) = match (&app.status_message, app.load.error()) {
        (Some(status), _) => (status.as_str(), SUBTEXT0),
        (None, Some(error)) => (error, RED),
        (None, None) => (help_hint, SUBTEXT0),
    };

    let status_bar = Paragraph::new(format!(" {} | {}", mode_str, status))
        .style(Style::default().fg(color).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_input_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 3, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN))
        .title("Load corpus from URL (Enter to load)");

    let input = Paragraph::new(format!("{}_", app.input_buffer))
        .block(block)
        .style(Style::default().fg(TEXT));
    frame.render_widget(input, area);
}

fn draw_help(frame: &mut Frame) {
    let rows = bindings();
    let area = centered_rect(60, rows.len() as u16 + 3, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let mut help_text = vec![Line::from(Span::styled(
        "Keys",
        Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
    ))];
    for (keys, what) in rows {
        help_text.push(Line::from(format!("  {:<12} {}", keys, what)));
    }

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
