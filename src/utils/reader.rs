//! CSV loading with byte-order-mark handling.
//!
//! Exports are small enough to load whole, so files are read into memory
//! and handed to a flexible `csv` reader that tolerates ragged rows.

use crate::error::AnalyzerError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// UTF-8 BOM bytes.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Strip a UTF-8 BOM from the beginning of data if present.
pub fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Read a whole CSV file and deserialize every row by header name.
///
/// Columns missing from the header fall back to the row type's serde
/// defaults; extra columns are ignored.
pub fn read_rows<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    parse_rows(strip_utf8_bom(&data)).map_err(|source| {
        AnalyzerError::Csv {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Deserialize CSV rows from an in-memory buffer.
pub fn parse_rows<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    reader.deserialize().collect()
}
