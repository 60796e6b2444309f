//! Run configuration resolved from the command line.
//!
//! Both settings are optional on the command line: the output directory
//! falls back to a per-user location and the input path to an interactive
//! prompt.

use crate::error::AnalyzerError;
use crate::utils::prompt::prompt_input_path;
use std::path::{Path, PathBuf};

/// Directory created under the desktop (or home) when `--output` is omitted.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "MFA-Analyzer";

const AUTH_METHODS_MARKER: &str = "AuthenticationMethods";
const REGISTRATION_MARKER: &str = "UserRegistrationDetails";

/// Validated settings for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl AnalyzerConfig {
    /// Resolve optional CLI values, prompting for the input when needed.
    pub fn resolve(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self, AnalyzerError> {
        let output_dir = match output {
            Some(dir) => validate_output_dir(&dir)?,
            None => default_output_dir(),
        };

        let input = match input {
            Some(path) => path,
            None => prompt_input_path()?,
        };
        validate_input(&input)?;

        Ok(Self { input, output_dir })
    }
}

/// `<Desktop>/MFA-Analyzer`, falling back to the home directory.
pub fn default_output_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Reject blank paths and paths that exist but are not directories.
pub fn validate_output_dir(dir: &Path) -> Result<PathBuf, AnalyzerError> {
    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(AnalyzerError::InvalidOutputDirectory(
            "output directory is blank".to_string(),
        ));
    }
    if dir.exists() && !dir.is_dir() {
        return Err(AnalyzerError::InvalidOutputDirectory(format!(
            "{} exists and is not a directory",
            dir.display()
        )));
    }
    Ok(dir.to_path_buf())
}

/// The input must carry a `.csv` extension and exist.
pub fn validate_input(path: &Path) -> Result<(), AnalyzerError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(AnalyzerError::NotACsvFile(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(AnalyzerError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Derive the User Registration Details path from the Authentication
/// Methods path by replacing every occurrence of the marker in the file
/// name.
///
/// Directory components are never rewritten, unlike a substitution over
/// the whole path string: `/AuthenticationMethods/x-AuthenticationMethods.csv`
/// maps to `/AuthenticationMethods/x-UserRegistrationDetails.csv`.
///
/// Returns `None` when the file name does not contain the marker.
pub fn registration_details_path(input: &Path) -> Option<PathBuf> {
    let file_name = input.file_name()?.to_str()?;
    if !file_name.contains(AUTH_METHODS_MARKER) {
        return None;
    }
    Some(input.with_file_name(file_name.replace(AUTH_METHODS_MARKER, REGISTRATION_MARKER)))
}
