//! Scorecard Web - WebAssembly version of the corpus rating tool
//!
//! This crate provides a browser-based version of scorecard using Ratzilla
//! for terminal rendering in the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::Terminal;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use scorecard_core::layout::cell_from_pixel;
use scorecard_core::{corpus_from_text, App, Effect, Key, ListView, LoadError, RetrievalError};

pub mod io;
mod ui;

/// Sample corpus shown before anything is loaded
const SAMPLE_CSV: &str = "id,text
intro,Press j and k to move between records. The focused record is highlighted.
rate,Press a s d f or g to give the focused record a score from 1 to 5.
copy,Press y to copy every score in row order. Unrated rows stay blank.
load,Press o and enter the URL of a CSV with id and text columns to rate your own corpus.
";

/// Everything the key, mouse and draw callbacks share
struct WebState {
    app: App,
    view: ListView,
    /// Terminal size in cells at the last draw
    grid: (u16, u16),
}

type Shared = Rc<RefCell<WebState>>;

/// Initialize the scorecard web application
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Create app with the sample corpus
    let mut app = App::new();
    if let Effect::Load(location) = app.request_load("sample") {
        app.finish_load(Ok(corpus_from_text(&location, SAMPLE_CSV)));
    }
    app.set_status("Welcome to scorecard! Press 'o' to load a CSV URL, '?' for help");

    // Wrap in Rc<RefCell> for shared state
    let state: Shared = Rc::new(RefCell::new(WebState {
        app,
        view: ListView::default(),
        grid: (0, 0),
    }));

    // Create terminal with DOM backend
    let backend = DomBackend::new()
        .map_err(|e| JsValue::from_str(&format!("Failed to create backend: {:?}", e)))?;
    let terminal = Terminal::new(backend)
        .map_err(|e| JsValue::from_str(&format!("Failed to create terminal: {:?}", e)))?;

    // Set up keyboard handler
    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let effect = {
                let mut state = state.borrow_mut();
                state.app.clear_status();
                state.app.handle_key(to_key(event.code))
            };
            run_effect(&state, effect);
        }
    });

    // Pointer hover focuses a record, a click on a star rates it
    terminal.on_mouse_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            let Some((column, row)) = pointer_cell(f64::from(event.x), f64::from(event.y), state.grid)
            else {
                return;
            };
            let len = state.app.session.as_ref().map(|s| s.len()).unwrap_or(0);
            let Some(hit) = state.view.hit(column, row, len) else {
                return;
            };

            match event.event {
                MouseEventKind::Moved => {
                    state.app.hover(hit.index);
                }
                MouseEventKind::Pressed if matches!(event.button, MouseButton::Left) => {
                    state.app.hover(hit.index);
                    if let Some(rating) = hit.rating {
                        state.app.rate(hit.index, rating);
                    }
                }
                _ => {}
            }
        }
    });

    // Draw loop
    terminal.draw_web(move |frame| {
        let mut state = state.borrow_mut();
        let area = frame.area();
        state.grid = (area.width, area.height);
        let WebState { app, view, .. } = &mut *state;
        ui::draw(frame, app, view);
    });

    web_sys::console::log_1(&"scorecard WASM initialized".into());

    Ok(())
}

/// Map a pointer position in CSS pixels to a terminal cell.
///
/// The DOM grid fills the window, so cell size is window size over grid size.
fn pointer_cell(x: f64, y: f64, grid: (u16, u16)) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    cell_from_pixel(x, y, (width, height), grid)
}

fn run_effect(state: &Shared, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::ScrollTo(index) => state.borrow_mut().view.scroll_into_view(index),
        Effect::Quit => {
            state
                .borrow_mut()
                .app
                .set_status("Close the tab to leave scorecard");
        }
        Effect::Copy(text) => copy(state, &text),
        Effect::Load(location) => start_load(state, location),
    }
}

fn copy(state: &Shared, text: &str) {
    let on_done = {
        let state = state.clone();
        move |result: Result<(), String>| {
            let mut state = state.borrow_mut();
            match result {
                Ok(()) => state.app.set_status("Copied ratings to clipboard"),
                Err(e) => state.app.set_status(&format!("Clipboard error: {}", e)),
            }
        }
    };

    match io::copy_to_clipboard(text, on_done) {
        Ok(()) => state.borrow_mut().app.set_status("Copying..."),
        Err(e) => state
            .borrow_mut()
            .app
            .set_status(&format!("Clipboard error: {:?}", e)),
    }
}

fn start_load(state: &Shared, location: String) {
    let on_done = {
        let state = state.clone();
        let location = location.clone();
        move |result: Result<String, RetrievalError>| {
            let corpus = result
                .map(|text| corpus_from_text(&location, &text))
                .map_err(LoadError::from);
            if let Err(e) = &corpus {
                web_sys::console::warn_1(&e.to_string().into());
            }
            let mut state = state.borrow_mut();
            if corpus.is_ok() {
                state.view.reset();
            }
            state.app.finish_load(corpus);
        }
    };

    if let Err(e) = io::fetch_text(&location, on_done) {
        let err = RetrievalError::Transport {
            location,
            message: format!("{:?}", e),
        };
        state.borrow_mut().app.finish_load(Err(err.into()));
    }
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
