use thiserror::Error;

/// Failure to retrieve the raw table text.
///
/// This is the only error kind surfaced to the annotator.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Failed to fetch {location}: {message}")]
    Transport { location: String, message: String },

    #[error("No response body from {location}")]
    NoBody { location: String },

    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from starting or completing a corpus load
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("A load is already in progress")]
    InFlight,

    #[error("Enter a location to load")]
    EmptyLocation,
}
