//! Terminal UI rendering for the scorecard CLI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use scorecard_core::keymap::bindings;
use scorecard_core::layout::{Area, ListView, CARD_HEIGHT, STAR_INDENT};
use scorecard_core::{App, CorpusRecord, Mode, Rating, Session};

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
            Constraint::Min(0),    // Main content
            Constraint::Length(4), // Export pane
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_main_area(frame, app, view, chunks[1]);
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

    let title_text = format!(" Scorecard - {} [{}/{}]{}", app.title(), rated, total, loading);

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, view: &mut ListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Record list
            Constraint::Percentage(40), // Focused record
        ])
        .split(area);

    match &app.session {
        Some(session) => {
            draw_records(frame, session, view, chunks[0]);
            draw_detail(frame, session, chunks[1]);
        }
        None => {
            view.set_area(Area::default(), 0);
            draw_usage(frame, area);
        }
    }
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

    for (slot, index) in view.visible_range(session.len()).enumerate() {
        let y = inner.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.y + inner.height - y);
        let card_area = Rect::new(inner.x, y, inner.width, height);

        let record = &session.records()[index];
        let focused = session.focus() == Some(index);
        let card = record_card(record, index, session.rating_at(index), focused, inner.width);
        frame.render_widget(card, card_area);
    }
}

fn record_card(
    record: &CorpusRecord,
    index: usize,
    rating: Option<Rating>,
    focused: bool,
    width: u16,
) -> Paragraph<'static> {
    let base = if focused {
        Style::default().fg(TEXT).bg(SURFACE1)
    } else {
        Style::default().fg(TEXT)
    };

    let meta = format!("Row: {}, ID: {}", CorpusRecord::row_number(index), record.id);
    let text = truncate(&record.text, usize::from(width));

    let mut stars = vec![Span::raw(" ".repeat(usize::from(STAR_INDENT)))];
    for level in Rating::all() {
        let filled = rating.is_some_and(|r| level <= r);
        let (glyph, color) = if filled { ("★", YELLOW) } else { ("☆", SUBTEXT0) };
        stars.push(Span::styled(glyph, Style::default().fg(color)));
        stars.push(Span::raw(" "));
    }

    Paragraph::new(vec![
        Line::from(Span::styled(meta, Style::default().fg(SUBTEXT0))),
        Line::from(text),
        Line::from(stars),
    ])
    .style(base)
}

fn draw_detail(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTEXT0))
        .title("Focused");

    let text = session
        .focus()
        .zip(session.focused_record())
        .map(|(index, record)| {
            format!(
                "Row: {}, ID: {}\n\n{}",
                CorpusRecord::row_number(index),
                record.id,
                record.text
            )
        })
        .unwrap_or_default();

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(TEXT))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_usage(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTEXT0))
        .title("Usage");

    let usage = vec![
        Line::from("1. Press o and enter the URL or path of a CSV with id and text columns."),
        Line::from("2. Rate each record: click a star, or focus it and press a s d f g (1-5)."),
        Line::from("3. When every record is rated, press y to copy the scores."),
        Line::from("4. Paste into the first score cell of your sheet (row 2)."),
    ];

    let paragraph = Paragraph::new(usage)
        .block(block)
        .style(Style::default().fg(TEXT))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_export(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MAUVE))
        .title("Export (y: copy)");

    let line = match app.export() {
        Some(export) => match export.warning() {
            Some(warning) => Line::from(Span::styled(warning, Style::default().fg(YELLOW))),
            None => Line::from(Span::styled("All records rated", Style::default().fg(GREEN))),
        },
        None => Line::from(Span::styled("Nothing loaded", Style::default().fg(SUBTEXT0))),
    };

    let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Input => "INPUT",
        Mode::Help => "HELP",
    };

    let help_hint = "j/k move | asdfg rate | n unrated | y copy | o open | ? help";

    let (text, color) = match (&app.status_message, app.load.error()) {
        (Some(status), _) => (status.as_str(), SUBTEXT0),
        (None, Some(error)) => (error, RED),
        (None, None) => (help_hint, SUBTEXT0),
    };

    let status_bar = Paragraph::new(format!(" {} | {}", mode_str, text))
        .style(Style::default().fg(color).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_input_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 3, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN))
        .title("Load corpus: URL or path (Enter to load, Esc to cancel)");

    let input = Paragraph::new(format!("{}_", app.input_buffer))
        .block(block)
        .style(Style::default().fg(TEXT));
    frame.render_widget(input, area);
}

fn draw_help(frame: &mut Frame) {
    let rows = bindings();
    let area = centered_rect(60, rows.len() as u16 + 4, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let mut help_text = vec![Line::from(Span::styled(
        "Keys",
        Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
    ))];
    help_text.extend(
        rows.iter()
            .map(|(keys, what)| Line::from(format!("  {:<12} {}", keys, what))),
    );
    help_text.push(Line::from(Span::styled(
        "Mouse: hover to focus, click a star to rate",
        Style::default().fg(SUBTEXT0),
    )));

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, width: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut out: String = flat.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a\nb", 10), "a b");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
