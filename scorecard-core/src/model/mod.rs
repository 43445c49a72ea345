pub mod corpus;
pub mod rating;
pub mod record;

pub use corpus::{Corpus, RatingMap};
pub use rating::{Rating, RatingError};
pub use record::CorpusRecord;
