//! Frequency tables and per-user shares.
//!
//! - [`aggregate`] - Statistics over the two normalized exports
//!
//! Percentages are always `count / denominator`; an empty population yields
//! an empty table rather than a division by zero.

pub mod aggregate;

pub use aggregate::{AuthMethodStats, RegistrationStats};

use crate::utils::format::{format_percentage, percentage};
use std::collections::HashMap;
use std::fmt;

/// A count over an applicable population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Share {
    pub count: usize,
    pub denominator: usize,
}

impl Share {
    pub fn new(count: usize, denominator: usize) -> Self {
        Self { count, denominator }
    }

    /// Count the items of `items` matching `predicate`, over all items.
    pub fn of<'a, T: 'a>(
        items: impl IntoIterator<Item = &'a T>,
        predicate: impl Fn(&T) -> bool,
    ) -> Self {
        let mut share = Self::default();
        for item in items {
            share.denominator += 1;
            if predicate(item) {
                share.count += 1;
            }
        }
        share
    }

    pub fn percentage(&self) -> String {
        format_percentage(self.count, self.denominator)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.count, self.percentage())
    }
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRow {
    pub label: String,
    pub count: usize,
    pub percentage: String,
}

/// Value → count → percentage, sorted by count descending.
///
/// Ties keep the order in which labels were first seen so the same input
/// always produces the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Header of the label column when written to disk.
    pub label_header: String,
    pub denominator: usize,
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Tally every value; the denominator is the number of values.
    pub fn from_values<I, S>(label_header: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut total = 0;

        for value in values {
            let value = value.as_ref();
            total += 1;
            match index.get(value) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(value.to_string(), counts.len());
                    counts.push((value.to_string(), 1));
                }
            }
        }

        Self::from_counts(label_header, counts, total)
    }

    /// Build from precomputed counts over an explicit population.
    ///
    /// Returns an empty table when `denominator` is zero.
    pub fn from_counts(
        label_header: &str,
        counts: Vec<(String, usize)>,
        denominator: usize,
    ) -> Self {
        let mut rows: Vec<FrequencyRow> = if denominator == 0 {
            Vec::new()
        } else {
            counts
                .into_iter()
                .map(|(label, count)| FrequencyRow {
                    percentage: format_percentage(count, denominator),
                    label,
                    count,
                })
                .collect()
        };

        // Stable sort keeps first-seen order among equal counts.
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            label_header: label_header.to_string(),
            denominator,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, label: &str) -> Option<&FrequencyRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Sum of row percentages, unrounded.
    pub fn total_percentage(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| percentage(r.count, self.denominator))
            .sum()
    }
}
