//! Errors raised by the JSON document store.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures while reading, decoding, or rewriting a store document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The document could not be read.
    #[error("failed to read store document at '{path}': {message}")]
    Read {
        /// Document path relative to the data directory.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document is not a JSON array of the expected records.
    #[error("store document at '{path}' is malformed: {message}")]
    Parse {
        /// Document path relative to the data directory.
        path: Utf8PathBuf,
        /// Description of the decoding error.
        message: String,
    },

    /// The replacement document could not be written.
    #[error("failed to write store document at '{path}': {message}")]
    Write {
        /// Path of the file that failed, temp or target.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Records could not be encoded as JSON.
    #[error("failed to encode store records: {message}")]
    Encode {
        /// Description of the encoding error.
        message: String,
    },

    /// The document name is not a single plain file name.
    #[error("store document path '{path}' must be a plain file name")]
    InvalidPath {
        /// Rejected path.
        path: Utf8PathBuf,
    },

    /// The data directory could not be opened.
    #[error("failed to open data directory '{path}': {message}")]
    Directory {
        /// Data directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A blocking filesystem task panicked or was cancelled.
    #[error("store task failed: {message}")]
    Task {
        /// Join error description.
        message: String,
    },
}
