//! Error types for cos2_table

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while building, writing or reading a table.
#[derive(Error, Debug)]
pub enum Error {
    /// The output file could not be created, written or flushed.
    #[error("cannot write table to '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table file could not be opened or read.
    #[error("cannot read table from '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed line in a table file (`line` is 1-based).
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O error while reading a table from a stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid bounds [{a}, {b}]: both must be finite with a ≤ b")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid step {0}: must be finite and positive")]
    InvalidStep(f64),

    /// `(b - a) / step` does not fit the index type.
    #[error("too many samples: (b - a) / step = {0}")]
    TooManySamples(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
