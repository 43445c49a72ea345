//! Scorecard Core - Platform-agnostic corpus rating library
//!
//! This crate provides the data model, table loading, annotation session,
//! and export logic for the scorecard rating tool. It's designed to work
//! both in native CLI and WASM environments.

pub mod app;
pub mod error;
pub mod export;
pub mod focus;
pub mod keymap;
pub mod layout;
pub mod loader;
pub mod model;
pub mod session;
pub mod table;
pub mod validate;

pub use app::{App, Effect, Mode};
pub use error::{LoadError, RetrievalError};
pub use export::{serialize, Export};
pub use focus::FocusCursor;
pub use keymap::{Action, Key};
pub use layout::{Area, Hit, ListView};
pub use loader::{corpus_from_text, load_corpus, Fetch, LoadState};
pub use model::{Corpus, CorpusRecord, Rating, RatingError, RatingMap};
pub use session::Session;
pub use table::{parse_table, RawRow};
pub use validate::{validate_row, validate_rows, Validated};
