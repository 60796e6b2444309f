//! # MFA Audit Tools
//!
//! Command-line tool for reviewing multi-factor-authentication adoption in a
//! Microsoft 365 tenant from two CSV exports of a log-extraction utility:
//! `*-AuthenticationMethods.csv` and `*-UserRegistrationDetails.csv`.
//!
//! ## Overview
//!
//! The exports are loosely typed: booleans are `"True"`/`"False"` strings,
//! registered methods are a multi-line cell and timestamps follow the
//! locale of the machine that produced them. This crate normalizes both
//! exports into canonical records, computes adoption statistics and writes
//! everything as CSV and XLSX for review in a DFIR workflow.
//!
//! ## Architecture
//!
//! - [`records`] - Raw rows, canonical records and normalization
//! - [`stats`] - Frequency tables and per-user shares
//! - [`report`] - CSV/XLSX emission and the console summary
//! - [`commands`] - The analysis pipeline
//! - [`config`] - Input/output resolution and validation
//! - [`error`] - Error taxonomy
//! - [`utils`] - Formatting, progress, prompting, CSV loading, timestamps
//!
//! ## Example Usage
//!
//! ```bash
//! mfa-audit --path ./20250124-AuthenticationMethods.csv --output ./case-42
//! ```
//!
//! ## Output
//!
//! ```text
//! case-42/CSV/AuthenticationMethods.csv
//! case-42/CSV/UserRegistrationDetails.csv
//! case-42/XLSX/*.xlsx
//! case-42/Stats/CSV/{MFA-Status,AuthenticationMethod,MethodsRegistered}.csv
//! case-42/Stats/XLSX/*.xlsx
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod records;
pub mod report;
pub mod stats;
pub mod utils;
