use std::fs;
use std::path::Path;

use tracing::debug;

use catalog_model::Record;

use crate::error::{OutputError, Result};

/// Column name appended to the pass-through header.
pub const PRICE_RANGE_COLUMN: &str = "PriceRange";

/// Render the complete output file as a string.
///
/// Fails if any record is missing its price range; nothing is rendered
/// partially in that case.
pub fn render_catalog(header: &str, records: &[Record]) -> Result<String> {
    let mut out = String::with_capacity(header.len() + records.len() * 32);
    out.push_str(header);
    out.push(',');
    out.push_str(PRICE_RANGE_COLUMN);
    out.push('\n');
    for record in records {
        if record.price_range.is_none() {
            return Err(OutputError::MissingPriceRange { id: record.id });
        }
        out.push_str(&record.to_csv_row());
        out.push('\n');
    }
    Ok(out)
}

/// Write the rendered catalog to `path`, creating missing parent
/// directories. The content is rendered fully before the file is touched.
pub fn write_catalog(path: &Path, header: &str, records: &[Record]) -> Result<()> {
    let content = render_catalog(header, records)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(rows = records.len(), path = %path.display(), "catalog written");
    Ok(())
}
