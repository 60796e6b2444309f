//! Command implementations.
//!
//! - [`analyze`] - Normalize both exports, compute MFA statistics and write
//!   the CSV/XLSX report set
pub mod analyze;
