use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading the source catalog.
///
/// All variants are fatal to the run: there is no skip-and-continue mode.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("{}: missing header line", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    WrongFieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: invalid id {value:?}", .path.display())]
    InvalidId {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("{}:{line}: invalid price {value:?}", .path.display())]
    InvalidPrice {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
