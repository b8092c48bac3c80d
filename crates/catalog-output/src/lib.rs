//! Load stage: write transformed records back out as delimited text.
//!
//! The output file is the pass-through input header with a `PriceRange`
//! column appended, followed by one row per record in input order. The whole
//! file is rendered in memory and written in a single call, so a failed run
//! never leaves a partially-written output behind.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{PRICE_RANGE_COLUMN, render_catalog, write_catalog};
