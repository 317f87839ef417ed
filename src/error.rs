use thiserror::Error;

/// Errors raised while enumerating or classifying multigraphs.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// A caller-supplied count, index or permutation is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A reduced vector whose length is not a triangular number.
    #[error("malformed reduced vector: length {len} is not v(v+1)/2 for any v >= 1")]
    MalformedInput { len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnumerationError>;
