use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use tracing::debug;

use catalog_model::Record;

use crate::error::{IngestError, Result};

/// Number of columns in a source data row.
pub const SOURCE_FIELDS: usize = 4;

/// A parsed source catalog: the raw header line plus records in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The header line exactly as read; passed through to the output, never
    /// validated.
    pub header: String,
    /// Records in input row order, price range unset on every one.
    pub records: Vec<Record>,
}

/// Read and parse the catalog at `path`.
///
/// The first non-blank row is captured as the header. Blank lines anywhere
/// in the file are silently skipped. Any row with a wrong field count or an
/// unparsable `id`/`price` aborts the whole extraction.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(IngestError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut header: Option<String> = None;
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if header.is_none() {
            header = Some(row.iter().collect::<Vec<_>>().join(","));
            continue;
        }
        let line = row.position().map_or(0, |position| position.line());
        records.push(parse_row(path, line, &row)?);
    }
    let header = header.ok_or_else(|| IngestError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    debug!(rows = records.len(), path = %path.display(), "catalog parsed");
    Ok(Catalog { header, records })
}

fn parse_row(path: &Path, line: u64, row: &StringRecord) -> Result<Record> {
    if row.len() != SOURCE_FIELDS {
        return Err(IngestError::WrongFieldCount {
            path: path.to_path_buf(),
            line,
            expected: SOURCE_FIELDS,
            found: row.len(),
        });
    }
    let id = row[0]
        .trim()
        .parse::<i64>()
        .map_err(|_| IngestError::InvalidId {
            path: path.to_path_buf(),
            line,
            value: row[0].to_string(),
        })?;
    let price = row[2]
        .trim()
        .parse::<Decimal>()
        .map_err(|_| IngestError::InvalidPrice {
            path: path.to_path_buf(),
            line,
            value: row[2].to_string(),
        })?;
    Ok(Record::new(id, &row[1], price, &row[3]))
}
