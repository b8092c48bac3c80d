//! Extract stage: parse the delimited product catalog into typed records.
//!
//! The source format is a UTF-8 comma-delimited file with one header line
//! followed by 4-field data rows (`id,name,price,category`), no embedded
//! delimiters or escaping. Extraction is all-or-nothing: a single bad row
//! aborts the run before any transform or load happens.

mod error;
mod extract;

pub use error::{IngestError, Result};
pub use extract::{Catalog, SOURCE_FIELDS, read_catalog};
