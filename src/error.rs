//! Error taxonomy for an analysis run.
//!
//! Configuration errors halt the run before anything is written. Input
//! errors halt the section they belong to. Data anomalies are never errors;
//! they are reported through logging and the run summary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving configuration, reading exports or writing
/// reports.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The output directory argument is blank or points at a file.
    #[error("Invalid output directory: {0}")]
    InvalidOutputDirectory(String),

    /// No input path was given and no terminal is available to ask for one.
    #[error("No input file given. Use --path <FILE> when running non-interactively")]
    InputRequired,

    /// The interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input file does not carry a `.csv` extension.
    #[error("Input file is not a CSV file: {}", .0.display())]
    NotACsvFile(PathBuf),

    /// The User Registration Details file derived from the input is missing.
    #[error("User Registration Details file not found: {}", .0.display())]
    CompanionNotFound(PathBuf),

    /// The file could not be parsed as a CSV with a header row.
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Building or saving a spreadsheet failed.
    #[error("Spreadsheet export failed for {}: {source}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl From<dialoguer::Error> for AnalyzerError {
    fn from(e: dialoguer::Error) -> Self {
        AnalyzerError::Prompt(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = AnalyzerError::NotACsvFile(PathBuf::from("/tmp/export.txt"));
        assert_eq!(
            err.to_string(),
            "Input file is not a CSV file: /tmp/export.txt"
        );

        let err = AnalyzerError::CompanionNotFound(PathBuf::from("x-UserRegistrationDetails.csv"));
        assert!(err.to_string().contains("x-UserRegistrationDetails.csv"));
    }
}
