use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{CorpusRecord, Rating};

/// Ratings keyed by record position, not by record id.
///
/// Absence of a key means the record is unrated.
pub type RatingMap = BTreeMap<usize, Rating>;

/// The ordered records produced by one successful load
#[derive(Debug, Clone)]
pub struct Corpus {
    pub records: Vec<CorpusRecord>,
    pub location: String,
    /// Rows discarded by validation
    pub dropped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Corpus {
    pub fn new(location: impl Into<String>, records: Vec<CorpusRecord>, dropped_rows: usize) -> Self {
        Self {
            records,
            location: location.into(),
            dropped_rows,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CorpusRecord> {
        self.records.get(index)
    }
}
