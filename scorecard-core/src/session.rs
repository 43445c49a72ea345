//! The annotation session: one loaded corpus, its focus, and its ratings.

use crate::export::{serialize, Export};
use crate::focus::FocusCursor;
use crate::model::{Corpus, CorpusRecord, Rating, RatingMap};

/// State owned for the lifetime of one successful load.
///
/// A new load replaces the whole session, ratings included.
#[derive(Debug, Clone)]
pub struct Session {
    corpus: Corpus,
    focus: FocusCursor,
    ratings: RatingMap,
}

impl Session {
    pub fn new(corpus: Corpus) -> Self {
        let focus = FocusCursor::new(corpus.len());
        Self {
            corpus,
            focus,
            ratings: RatingMap::new(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn records(&self) -> &[CorpusRecord] {
        &self.corpus.records
    }

    pub fn ratings(&self) -> &RatingMap {
        &self.ratings
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus.index()
    }

    pub fn focused_record(&self) -> Option<&CorpusRecord> {
        self.focus().and_then(|index| self.corpus.get(index))
    }

    pub fn rating_at(&self, index: usize) -> Option<Rating> {
        self.ratings.get(&index).copied()
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn move_focus_next(&mut self) -> Option<usize> {
        self.focus.move_next()
    }

    pub fn move_focus_prev(&mut self) -> Option<usize> {
        self.focus.move_prev()
    }

    pub fn move_focus_first(&mut self) -> Option<usize> {
        self.focus.move_to_first()
    }

    pub fn move_focus_last(&mut self) -> Option<usize> {
        self.focus.move_to_last()
    }

    /// Focus the record under the pointer
    pub fn set_focus(&mut self, index: usize) -> bool {
        self.focus.set(index)
    }

    /// Record `rating` at `index`, replacing any earlier rating there.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn rate(&mut self, index: usize, rating: Rating) -> bool {
        if index >= self.corpus.len() {
            return false;
        }
        let previous = self.ratings.insert(index, rating);
        tracing::debug!(index, rating = rating.value(), previous = ?previous.map(Rating::value), "rated");
        true
    }

    /// Rate whatever record holds focus right now
    pub fn rate_focused(&mut self, rating: Rating) -> Option<usize> {
        let index = self.focus()?;
        self.rate(index, rating).then_some(index)
    }

    /// Move focus to the next unrated record after the current one,
    /// wrapping to the start. Focus stays put when everything is rated.
    pub fn focus_next_unrated(&mut self) -> Option<usize> {
        let start = self.focus()?;
        let len = self.len();
        let target = (1..=len)
            .map(|step| (start + step) % len)
            .find(|index| !self.ratings.contains_key(index))?;
        self.focus.set(target);
        Some(target)
    }

    /// Position-aligned export of the current ratings
    pub fn export(&self) -> Export {
        serialize(&self.corpus.records, &self.ratings)
    }
}
