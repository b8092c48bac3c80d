use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while writing the transformed catalog. All are fatal.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A record reached the loader without a computed price range. This is a
    /// pipeline sequencing bug, not bad input data.
    #[error("record {id}: price range not computed before load")]
    MissingPriceRange { id: i64 },

    #[error("create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
