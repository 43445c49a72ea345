//! Corpus loading: retrieval, parsing, validation, and the in-flight flag.

use crate::error::{LoadError, RetrievalError};
use crate::model::Corpus;
use crate::table::parse_table;
use crate::validate::validate_rows;

/// Retrieves raw table text from a location.
///
/// Native front-ends implement this over HTTP and the filesystem.
pub trait Fetch {
    fn fetch(&self, location: &str) -> Result<String, RetrievalError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, RetrievalError>,
{
    fn fetch(&self, location: &str) -> Result<String, RetrievalError> {
        self(location)
    }
}

/// Build a corpus from already-retrieved text.
///
/// Malformed rows are dropped and counted, never reported as errors.
pub fn corpus_from_text(location: &str, text: &str) -> Corpus {
    let table = parse_table(text);
    let validated = validate_rows(&table.rows);
    let dropped = validated.dropped + table.malformed;

    if dropped > 0 {
        tracing::warn!(location, dropped, "dropped rows without a string id and text");
    }
    tracing::info!(location, records = validated.records.len(), "corpus parsed");

    Corpus::new(location, validated.records, dropped)
}

/// Retrieve and parse a corpus in one blocking call.
pub fn load_corpus<F: Fetch + ?Sized>(fetcher: &F, location: &str) -> Result<Corpus, LoadError> {
    let text = fetcher.fetch(location)?;
    Ok(corpus_from_text(location, &text))
}

/// Loading flag and last load error.
///
/// At most one retrieval is outstanding: [`LoadState::begin`] refuses a second
/// one until [`LoadState::finish`] runs.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    loading: bool,
    error: Option<String>,
}

impl LoadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a retrieval as started and clear the previous error.
    pub fn begin(&mut self, location: &str) -> Result<(), LoadError> {
        if self.loading {
            return Err(LoadError::InFlight);
        }
        if location.trim().is_empty() {
            return Err(LoadError::EmptyLocation);
        }
        self.loading = true;
        self.error = None;
        tracing::info!(location, "load started");
        Ok(())
    }

    /// Mark the outstanding retrieval as complete.
    pub fn finish<T>(&mut self, result: &Result<T, LoadError>) {
        self.loading = false;
        if let Err(err) = result {
            tracing::warn!(error = %err, "load failed");
            self.error = Some(err.to_string());
        }
    }
}
