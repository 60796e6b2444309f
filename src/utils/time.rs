//! Timestamp layout detection for registration exports.
//!
//! The extractor writes `LastUpdatedDateTime` in the locale of the machine
//! it ran on. The layout is detected once per file from a sample value and
//! every row is parsed with it.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Canonical output layout (`yyyy-MM-dd HH:mm:ss`).
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn german_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}$").expect("Invalid timestamp pattern")
    })
}

fn us_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{1,2}:\d{2}:\d{2} (AM|PM)$")
            .expect("Invalid timestamp pattern")
    })
}

/// The two locale layouts the extractor is known to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampLayout {
    /// `dd.MM.yyyy HH:mm:ss`
    German,
    /// `M/d/yyyy h:mm:ss tt`
    Us,
}

impl TimestampLayout {
    /// Detect the layout of a sample value, `None` when neither matches.
    pub fn detect(sample: &str) -> Option<Self> {
        let sample = sample.trim();
        if german_pattern().is_match(sample) {
            Some(Self::German)
        } else if us_pattern().is_match(sample) {
            Some(Self::Us)
        } else {
            None
        }
    }

    fn chrono_format(self) -> &'static str {
        match self {
            Self::German => "%d.%m.%Y %H:%M:%S",
            Self::Us => "%m/%d/%Y %I:%M:%S %p",
        }
    }

    /// Parse a value with this layout.
    pub fn parse(self, value: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value.trim(), self.chrono_format())
            .with_context(|| format!("Failed to parse timestamp '{}' as {}", value, self))
    }
}

impl fmt::Display for TimestampLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::German => f.write_str("dd.MM.yyyy HH:mm:ss"),
            Self::Us => f.write_str("M/d/yyyy h:mm:ss tt"),
        }
    }
}

/// Format a timestamp in the canonical output layout.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}
