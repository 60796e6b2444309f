//! Report emission: canonical CSVs, stats tables, spreadsheets and the
//! console summary.
//!
//! - [`tables`] - CSV serialization of records and frequency tables
//! - [`spreadsheet`] - XLSX rendition of a written CSV
//! - [`console`] - Human-readable run summary on stdout
//!
//! # Output layout
//!
//! ```text
//! <output>/CSV/AuthenticationMethods.csv
//! <output>/CSV/UserRegistrationDetails.csv
//! <output>/XLSX/AuthenticationMethods.xlsx
//! <output>/XLSX/UserRegistrationDetails.xlsx
//! <output>/Stats/CSV/{MFA-Status,AuthenticationMethod,MethodsRegistered}.csv
//! <output>/Stats/XLSX/{MFA-Status,AuthenticationMethod,MethodsRegistered}.xlsx
//! ```

pub mod console;
pub mod spreadsheet;
pub mod tables;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const AUTHENTICATION_METHODS: &str = "AuthenticationMethods";
pub const USER_REGISTRATION_DETAILS: &str = "UserRegistrationDetails";
pub const MFA_STATUS: &str = "MFA-Status";
pub const AUTHENTICATION_METHOD: &str = "AuthenticationMethod";
pub const METHODS_REGISTERED: &str = "MethodsRegistered";

/// Directory layout of one run's output.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dirs(&self) -> [PathBuf; 4] {
        [
            self.root.join("CSV"),
            self.root.join("XLSX"),
            self.root.join("Stats").join("CSV"),
            self.root.join("Stats").join("XLSX"),
        ]
    }

    /// Create every output directory.
    pub fn create_dirs(&self) -> Result<()> {
        for dir in self.dirs() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn csv(&self, name: &str) -> PathBuf {
        self.root.join("CSV").join(format!("{}.csv", name))
    }

    pub fn xlsx(&self, name: &str) -> PathBuf {
        self.root.join("XLSX").join(format!("{}.xlsx", name))
    }

    pub fn stats_csv(&self, name: &str) -> PathBuf {
        self.root.join("Stats").join("CSV").join(format!("{}.csv", name))
    }

    pub fn stats_xlsx(&self, name: &str) -> PathBuf {
        self.root.join("Stats").join("XLSX").join(format!("{}.xlsx", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_paths() {
        let layout = OutputLayout::new("/out");
        assert_eq!(
            layout.csv(AUTHENTICATION_METHODS),
            Path::new("/out/CSV/AuthenticationMethods.csv")
        );
        assert_eq!(
            layout.stats_xlsx(MFA_STATUS),
            Path::new("/out/Stats/XLSX/MFA-Status.xlsx")
        );
    }

    #[test]
    fn test_create_dirs() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path().join("run"));
        layout.create_dirs().unwrap();
        assert!(dir.path().join("run/Stats/XLSX").is_dir());
        assert!(dir.path().join("run/CSV").is_dir());
    }
}
