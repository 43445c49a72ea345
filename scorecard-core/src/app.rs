use crate::error::LoadError;
use crate::export::Export;
use crate::keymap::{action_for_key, Action, Key};
use crate::loader::LoadState;
use crate::model::{Corpus, Rating};
use crate::session::Session;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input,
    Help,
}

/// Side effect a front-end must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Bring the record at this position into view
    ScrollTo(usize),
    /// Write this text to the clipboard
    Copy(String),
    /// Retrieve this location, then report back via [`App::finish_load`]
    Load(String),
    Quit,
}

/// Platform-agnostic application state
pub struct App {
    pub session: Option<Session>,
    pub load: LoadState,
    pub mode: Mode,
    pub running: bool,

    // Location prompt
    pub input_buffer: String,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: None,
            load: LoadState::new(),
            mode: Mode::Normal,
            running: true,

            input_buffer: String::new(),

            status_message: None,
        }
    }

    /// Dispatch one key press according to the current mode
    pub fn handle_key(&mut self, key: Key) -> Effect {
        match self.mode {
            Mode::Normal => match action_for_key(key) {
                Some(action) => self.apply(action),
                None => Effect::None,
            },
            Mode::Input => self.handle_input_key(key),
            Mode::Help => {
                self.mode = Mode::Normal;
                Effect::None
            }
        }
    }

    /// Apply a normal-mode action
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::FocusNext => self.navigate(Session::move_focus_next),
            Action::FocusPrev => self.navigate(Session::move_focus_prev),
            Action::FocusFirst => self.navigate(Session::move_focus_first),
            Action::FocusLast => self.navigate(Session::move_focus_last),
            Action::NextUnrated => {
                let effect = self.navigate(Session::focus_next_unrated);
                if effect == Effect::None && self.session.as_ref().is_some_and(|s| !s.is_empty()) {
                    self.set_status("Every record is rated");
                }
                effect
            }
            Action::Rate(rating) => {
                self.rate_focused(rating);
                Effect::None
            }
            Action::Copy => self.copy(),
            Action::OpenLoadPrompt => {
                if self.load.is_loading() {
                    self.set_status("Loading...");
                } else {
                    self.input_buffer.clear();
                    self.mode = Mode::Input;
                }
                Effect::None
            }
            Action::ToggleHelp => {
                self.mode = Mode::Help;
                Effect::None
            }
            Action::Quit => {
                self.running = false;
                Effect::Quit
            }
        }
    }

    fn handle_input_key(&mut self, key: Key) -> Effect {
        match key {
            Key::Esc => {
                self.mode = Mode::Normal;
                self.input_buffer.clear();
                Effect::None
            }
            Key::Enter => {
                self.mode = Mode::Normal;
                let location = std::mem::take(&mut self.input_buffer);
                self.request_load(&location)
            }
            Key::Backspace => {
                self.input_buffer.pop();
                Effect::None
            }
            Key::Char(c) => {
                self.input_buffer.push(c);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn navigate(&mut self, step: fn(&mut Session) -> Option<usize>) -> Effect {
        match self.session.as_mut().and_then(step) {
            Some(index) => Effect::ScrollTo(index),
            None => Effect::None,
        }
    }

    /// Rate the focused record, read at dispatch time
    pub fn rate_focused(&mut self, rating: Rating) -> Option<usize> {
        self.session.as_mut()?.rate_focused(rating)
    }

    /// Pointer click on a record's rating control
    pub fn rate(&mut self, index: usize, rating: Rating) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.rate(index, rating))
    }

    /// Pointer entered a record
    pub fn hover(&mut self, index: usize) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.set_focus(index))
    }

    fn copy(&mut self) -> Effect {
        match self.export() {
            Some(export) => {
                tracing::info!(lines = export.ratings.len(), unrated = export.unrated.len(), "copying ratings");
                Effect::Copy(export.text)
            }
            None => {
                self.set_status("Nothing loaded");
                Effect::None
            }
        }
    }

    /// Start a load if none is outstanding.
    ///
    /// On refusal the reason lands in the status line and nothing else changes.
    pub fn request_load(&mut self, location: &str) -> Effect {
        let location = location.trim();
        match self.load.begin(location) {
            Ok(()) => Effect::Load(location.to_string()),
            Err(err) => {
                self.set_status(&err.to_string());
                Effect::None
            }
        }
    }

    /// Complete the outstanding load.
    ///
    /// Success replaces the session wholesale; failure keeps the previous
    /// session untouched and records the error.
    pub fn finish_load(&mut self, result: Result<Corpus, LoadError>) {
        self.load.finish(&result);
        if let Ok(corpus) = result {
            let at = corpus.loaded_at.format("%H:%M:%S UTC");
            let status = match corpus.dropped_rows {
                0 => format!("Loaded {} records at {}", corpus.len(), at),
                dropped => format!("Loaded {} records at {} ({} rows skipped)", corpus.len(), at, dropped),
            };
            tracing::info!(location = %corpus.location, records = corpus.len(), "session started");
            self.session = Some(Session::new(corpus));
            self.set_status(&status);
        }
    }

    /// Derived export view, recomputed on every call
    pub fn export(&self) -> Option<Export> {
        self.session.as_ref().map(Session::export)
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get title for display
    pub fn title(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.corpus().location.clone())
            .unwrap_or_else(|| "No corpus".to_string())
    }

    /// `(rated, total)` for the title bar
    pub fn progress(&self) -> (usize, usize) {
        self.session
            .as_ref()
            .map(|s| (s.rated_count(), s.len()))
            .unwrap_or((0, 0))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
