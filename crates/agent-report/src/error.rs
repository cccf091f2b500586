use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error that occurred while loading a run record.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The record file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Io {
        /// Path of the record file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The record is not a valid run.
    #[error("invalid run record: {0}")]
    Parse(#[from] serde_json::Error),
}
