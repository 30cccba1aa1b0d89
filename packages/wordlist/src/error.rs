//! Error handling for word list lookups and loading

use std::path::PathBuf;
use thiserror::Error;

/// Word list errors
#[derive(Debug, Error)]
pub enum WordlistError {
    /// Lookup past the end of the list
    #[error("Word index out of range: {index} (word lists hold 2048 words)")]
    IndexOutOfRange {
        /// Requested index
        index: u16,
    },

    /// List file did not hold the required number of words
    #[error("Invalid word count: expected {expected}, got {actual}")]
    WordCount {
        /// Required number of words
        expected: usize,
        /// Number of words found
        actual: usize,
    },

    /// Blank line inside a list file
    #[error("Empty word on line {line}")]
    EmptyWord {
        /// One-based line number
        line: usize,
    },

    /// List is not in ascending order, so binary search would be unsound
    #[error("Word list is not sorted at position {position}")]
    Unsorted {
        /// Zero-based index of the first out-of-order word
        position: usize,
    },

    /// List file could not be read
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for word list operations
pub type Result<T> = std::result::Result<T, WordlistError>;
