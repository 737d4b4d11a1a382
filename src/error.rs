use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. This is a one-shot batch tool: every variant
/// aborts the run, nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: missing required column {column:?}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{line}: expected at least {expected} fields, found {found}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: invalid rank {value:?} (ranks are positive integers, 1 = strongest)", .path.display())]
    InvalidRank {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{}:{line}: unknown theme {theme:?} for {first} {last} (not in the 34-theme taxonomy)", .path.display())]
    UnknownTheme {
        path: PathBuf,
        line: usize,
        theme: String,
        first: String,
        last: String,
    },

    #[error("chart render failed for {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
