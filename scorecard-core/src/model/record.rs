use serde::{Deserialize, Serialize};

/// One unit of text to be scored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusRecord {
    pub id: String,
    pub text: String,
}

impl CorpusRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Spreadsheet row number for the record at `position`.
    ///
    /// Row 1 holds the header, so the first record lands on row 2.
    pub fn row_number(position: usize) -> usize {
        position + 2
    }
}
