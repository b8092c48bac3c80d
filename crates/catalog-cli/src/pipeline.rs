//! The Extract -> Transform -> Load driver.
//!
//! The pipeline is a deterministic, single-threaded batch: the whole input
//! is read into memory before any transform begins, every record is
//! transformed independently in input order, and the output is written only
//! after all transforms complete. A failure at any stage aborts the run
//! without producing a partial output file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use catalog_ingest::{Catalog, read_catalog};
use catalog_model::{PriceRange, Record};
use catalog_output::write_catalog;
use catalog_transform::transform_all;

/// Default source location, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/products.csv";

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data/transformed_products.csv";

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Extract and transform but skip the load stage.
    pub dry_run: bool,
}

/// Outcome of a completed run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written destination; `None` when the run was a dry run.
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub rows_transformed: usize,
    /// Record counts per derived price range.
    pub range_counts: BTreeMap<PriceRange, usize>,
}

/// Execute the full batch over the configured input file.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let extract_span = info_span!("extract", input = %options.input.display());
    let extract_start = Instant::now();
    let Catalog { header, records } = extract_span
        .in_scope(|| read_catalog(&options.input))
        .context("extract")?;
    let rows_read = records.len();
    info!(
        rows = rows_read,
        duration_ms = extract_start.elapsed().as_millis(),
        "extract complete"
    );

    let transform_span = info_span!("transform");
    let transform_start = Instant::now();
    let transformed = transform_span.in_scope(|| transform_all(records));
    info!(
        rows = transformed.len(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let range_counts = range_breakdown(&transformed);

    let output = if options.dry_run {
        debug!("dry run, skipping load");
        None
    } else {
        let load_span = info_span!("load", output = %options.output.display());
        let load_start = Instant::now();
        load_span
            .in_scope(|| write_catalog(&options.output, &header, &transformed))
            .context("load")?;
        info!(
            rows = transformed.len(),
            duration_ms = load_start.elapsed().as_millis(),
            "load complete"
        );
        Some(options.output.clone())
    };

    Ok(RunResult {
        input: options.input.clone(),
        output,
        rows_read,
        rows_transformed: transformed.len(),
        range_counts,
    })
}

fn range_breakdown(records: &[Record]) -> BTreeMap<PriceRange, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(range) = record.price_range {
            *counts.entry(range).or_insert(0) += 1;
        }
    }
    counts
}
