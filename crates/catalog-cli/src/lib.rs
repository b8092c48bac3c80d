//! Library components for the catalog ETL CLI.

pub mod logging;
pub mod pipeline;
