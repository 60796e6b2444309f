//! End-to-end MFA analysis of an Authentication Methods export and its
//! User Registration Details companion.
//!
//! # Usage
//!
//! ```bash
//! # Explicit input and output
//! mfa-audit --path 20250124-AuthenticationMethods.csv --output ./case-42
//!
//! # Prompt for the input, write to ~/Desktop/MFA-Analyzer
//! mfa-audit
//! ```
//!
//! # Sections
//!
//! 1. **Authentication Methods**: canonical CSV/XLSX, MFA status table and
//!    authentication method usage table.
//! 2. **User Registration Details**: read from the file whose name swaps
//!    `AuthenticationMethods` for `UserRegistrationDetails`. Canonical
//!    CSV/XLSX and the registered methods table.
//!
//! A failure in the second section is reported and leaves the first
//! section's output in place.

use crate::config::{registration_details_path, validate_input, validate_output_dir};
use crate::error::AnalyzerError;
use crate::records::{load_authentication_methods, load_user_registrations, RegistrationBatch};
use crate::report::spreadsheet::csv_to_xlsx;
use crate::report::{console, tables, OutputLayout};
use crate::report::{
    AUTHENTICATION_METHOD, AUTHENTICATION_METHODS, METHODS_REGISTERED, MFA_STATUS,
    USER_REGISTRATION_DETAILS,
};
use crate::stats::{AuthMethodStats, FrequencyTable, RegistrationStats};
use crate::utils::format::format_number;
use crate::utils::progress::ProgressBar;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Outcome of one run.
#[derive(Debug)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub auth_stats: AuthMethodStats,
    pub registration: Option<(RegistrationBatch, RegistrationStats)>,
    /// Why the registration section did not complete, if it did not.
    pub registration_error: Option<String>,
    /// Every CSV and XLSX file written, in write order.
    pub files_written: Vec<PathBuf>,
}

/// Writes a CSV and its spreadsheet counterpart, recording both paths.
struct Emitter<'a> {
    layout: &'a OutputLayout,
    written: Vec<PathBuf>,
}

impl<'a> Emitter<'a> {
    fn new(layout: &'a OutputLayout) -> Self {
        Self {
            layout,
            written: Vec::new(),
        }
    }

    fn spreadsheet(&mut self, csv_path: PathBuf, xlsx_path: PathBuf) -> Result<()> {
        self.written.push(csv_path.clone());
        if csv_to_xlsx(&csv_path, &xlsx_path)? {
            self.written.push(xlsx_path);
        }
        Ok(())
    }

    fn records(&mut self, name: &str, write: impl FnOnce(&Path) -> Result<()>) -> Result<()> {
        let csv_path = self.layout.csv(name);
        let xlsx_path = self.layout.xlsx(name);
        write(&csv_path)?;
        self.spreadsheet(csv_path, xlsx_path)
    }

    fn table(&mut self, name: &str, table: &FrequencyTable) -> Result<()> {
        if table.is_empty() {
            info!("No data for {}, table not written", name);
            return Ok(());
        }
        let csv_path = self.layout.stats_csv(name);
        let xlsx_path = self.layout.stats_xlsx(name);
        tables::write_frequency_table(table, &csv_path)?;
        self.spreadsheet(csv_path, xlsx_path)
    }
}

fn authentication_methods_section(input: &Path, emitter: &mut Emitter) -> Result<AuthMethodStats> {
    let spinner = ProgressBar::new_spinner("Loading Authentication Methods");
    let records = load_authentication_methods(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    spinner.finish_and_clear();
    info!(
        "Loaded {} authentication method records",
        format_number(records.len())
    );

    emitter.records(AUTHENTICATION_METHODS, |path| {
        tables::write_authentication_methods(&records, path)
    })?;

    let stats = AuthMethodStats::compute(&records);
    console::print_auth_method_summary(&stats);

    emitter.table(MFA_STATUS, &stats.mfa_status)?;
    emitter.table(AUTHENTICATION_METHOD, &stats.method_usage)?;

    Ok(stats)
}

fn registration_section(
    input: &Path,
    emitter: &mut Emitter,
) -> Result<(RegistrationBatch, RegistrationStats)> {
    let path = registration_details_path(input)
        .filter(|p| p.is_file())
        .ok_or_else(|| {
            AnalyzerError::CompanionNotFound(
                registration_details_path(input).unwrap_or_else(|| input.to_path_buf()),
            )
        })?;

    let spinner = ProgressBar::new_spinner("Loading User Registration Details");
    let batch = load_user_registrations(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    spinner.finish_and_clear();
    info!(
        "Loaded {} user registration records",
        format_number(batch.records.len())
    );

    emitter.records(USER_REGISTRATION_DETAILS, |out| {
        tables::write_user_registrations(&batch.records, out)
    })?;

    let stats = RegistrationStats::compute(&batch.records);
    if stats.no_methods_registered {
        warn!("No user has any authentication method registered");
    }
    if stats.admins_without_mfa.count > 0 {
        warn!(
            "{} admins are not registered for MFA",
            stats.admins_without_mfa.count
        );
    }
    console::print_registration_summary(&stats, &batch);

    emitter.table(METHODS_REGISTERED, &stats.methods_registered)?;

    Ok((batch, stats))
}

/// Run both sections against `input`, writing under `output_dir`.
///
/// Input and output validation failures abort before anything is written.
pub fn run(input: &Path, output_dir: &Path) -> Result<RunSummary> {
    validate_input(input)?;
    let output_dir = validate_output_dir(output_dir)?;

    let layout = OutputLayout::new(&output_dir);
    layout.create_dirs()?;
    info!("Input: {}", input.display());
    info!("Output: {}", layout.root().display());

    let mut emitter = Emitter::new(&layout);
    let auth_stats = authentication_methods_section(input, &mut emitter)?;

    let (registration, registration_error) = match registration_section(input, &mut emitter) {
        Ok(section) => (Some(section), None),
        Err(e) => {
            error!("User Registration Details section failed: {:#}", e);
            (None, Some(format!("{:#}", e)))
        }
    };

    let files_written = emitter.written;
    info!(
        "Wrote {} files to {}",
        files_written.len(),
        output_dir.display()
    );

    Ok(RunSummary {
        output_dir,
        auth_stats,
        registration,
        registration_error,
        files_written,
    })
}
