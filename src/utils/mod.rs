//! Utility functions and helpers.
//!
//! This module provides common functionality used across the pipeline:
//!
//! - [`format`] - Number and percentage formatting
//! - [`progress`] - Progress tracking and display utilities
//! - [`prompt`] - Interactive input-path prompt
//! - [`reader`] - BOM-aware CSV loading
//! - [`time`] - Timestamp layout detection and formatting
//!
//! # Examples
//!
//! ## Detecting a timestamp layout
//!
//! ```
//! use mfa_audit_tools::utils::time::{format_timestamp, TimestampLayout};
//!
//! let layout = TimestampLayout::detect("24.01.2025 13:05:00").unwrap();
//! let parsed = layout.parse("24.01.2025 13:05:00").unwrap();
//! assert_eq!(format_timestamp(&parsed), "2025-01-24 13:05:00");
//! ```

pub mod format;
pub mod progress;
pub mod prompt;
pub mod reader;
pub mod time;
