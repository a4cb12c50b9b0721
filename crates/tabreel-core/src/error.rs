//! Error types for tabreel-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabreel-core
#[derive(Debug, Error)]
pub enum Error {
    /// Table has no columns defined
    #[error("table has no columns")]
    NoColumns,

    /// Two columns share the same title
    #[error("duplicate column title: {0}")]
    DuplicateColumnTitle(String),

    /// A column's value extractor failed for a specific item
    #[error("value extraction failed for column '{column}', item {item}: {message}")]
    Extraction {
        /// Title of the failing column
        column: String,
        /// 0-based index of the item in the table's collection
        item: usize,
        /// Underlying failure description
        message: String,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
