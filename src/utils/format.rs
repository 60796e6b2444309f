//! Number and percentage formatting utilities.
//!
//! Shared by the console summary and the stats tables so that a percentage
//! printed on screen matches the one written to disk.

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use mfa_audit_tools::utils::format::format_number;
///
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats `count / denominator` as a percentage with two decimals.
///
/// A zero denominator yields `0.00%` instead of dividing.
///
/// # Examples
///
/// ```
/// use mfa_audit_tools::utils::format::format_percentage;
///
/// assert_eq!(format_percentage(2, 3), "66.67%");
/// assert_eq!(format_percentage(1, 3), "33.33%");
/// assert_eq!(format_percentage(0, 0), "0.00%");
/// ```
pub fn format_percentage(count: usize, denominator: usize) -> String {
    format!("{:.2}%", percentage(count, denominator))
}

/// Returns `count / denominator` scaled to 0..=100, or 0.0 for an empty population.
pub fn percentage(count: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        (count as f64 / denominator as f64) * 100.0
    }
}
