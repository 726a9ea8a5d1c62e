use super::types::{Dataset, Record};
use crate::error::LoadError;
use std::path::Path;

/// Field separator of the registry export.
pub const DELIMITER: u8 = b';';

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Loads the registry export at `path`.
///
/// A missing file or any read/parse failure yields an empty dataset. The
/// failure is logged, never returned: either every row loads or none does.
pub fn load(path: &Path) -> Dataset {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Registry file not found");
        return Dataset::empty();
    }

    match try_load(path) {
        Ok(dataset) => {
            tracing::info!(
                path = %path.display(),
                records = dataset.len(),
                "Loaded registry records"
            );
            dataset
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load registry file");
            Dataset::empty()
        }
    }
}

/// Reads and parses the export, surfacing the first failure.
pub fn try_load(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    parse(&text)
}

/// Parses export text: a header row naming the columns, then one record per
/// row. A leading byte-order mark is skipped.
pub fn parse(text: &str) -> Result<Dataset, LoadError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let mut record = Record::default();
        // Short rows leave trailing columns absent; surplus cells are dropped.
        for (idx, name) in headers.iter().enumerate() {
            record.set(name, row.get(idx));
        }
        records.push(record);
    }

    Ok(Dataset::new(records))
}
