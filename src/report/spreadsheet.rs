//! Spreadsheet rendition of written CSV files.
//!
//! Every XLSX is built from the CSV that was just written, so the two are
//! always 1:1. The first row is a bold, frozen header with an autofilter and
//! columns are autofit. Integer cells become numbers only when the number
//! renders back to the exact cell text; everything else stays text.

use crate::error::AnalyzerError;
use crate::utils::progress::ProgressBar;
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use tracing::{debug, warn};

/// Excel rejects worksheet names longer than this.
const MAX_SHEET_NAME: usize = 31;

fn sheet_name(xlsx_path: &Path) -> String {
    xlsx_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1")
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect()
}

/// Largest integer an XLSX number cell (an `f64`) holds exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// The cell as a number, if writing it as one keeps its text unchanged.
///
/// `007`, `+5` and integers beyond 2^53 stay text.
fn numeric_cell(value: &str) -> Option<f64> {
    let number = value.parse::<i64>().ok()?;
    if number.to_string() != value || number.unsigned_abs() > MAX_EXACT_INTEGER {
        return None;
    }
    Some(number as f64)
}

/// Convert `csv_path` into a spreadsheet at `xlsx_path`.
///
/// Returns `Ok(false)` without writing anything when the CSV is empty or
/// whitespace-only.
pub fn csv_to_xlsx(csv_path: &Path, xlsx_path: &Path) -> Result<bool> {
    let content = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path.display()))?;
    if content.trim().is_empty() {
        warn!("Skipping spreadsheet for empty file {}", csv_path.display());
        return Ok(false);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|source| AnalyzerError::Csv {
            path: csv_path.to_path_buf(),
            source,
        })?;

    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if columns == 0 {
        warn!("Skipping spreadsheet for empty file {}", csv_path.display());
        return Ok(false);
    }

    build_workbook(&rows, columns, xlsx_path).map_err(|source| AnalyzerError::Spreadsheet {
        path: xlsx_path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} ({} rows)", xlsx_path.display(), rows.len());
    Ok(true)
}

fn build_workbook(
    rows: &[csv::StringRecord],
    columns: usize,
    xlsx_path: &Path,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(xlsx_path))?;

    let progress = ProgressBar::new(rows.len(), "Writing spreadsheet");

    for (row_idx, record) in rows.iter().enumerate() {
        let row = row_idx as u32;
        for (col_idx, value) in record.iter().enumerate() {
            let col = col_idx as u16;
            if row == 0 {
                worksheet.write_string_with_format(row, col, value, &header_format)?;
            } else if let Some(number) = numeric_cell(value) {
                worksheet.write_number(row, col, number)?;
            } else {
                worksheet.write_string(row, col, value)?;
            }
        }
        progress.inc();
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(0, 0, (rows.len() - 1) as u32, (columns - 1) as u16)?;
    worksheet.autofit();

    workbook.save(xlsx_path)?;
    progress.finish_and_clear();
    Ok(())
}
