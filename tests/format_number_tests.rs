// Test format_number and format_percentage from the utils module
// format_number adds thousand separators (e.g., 1234567 -> "1,234,567")

use mfa_audit_tools::utils::format::{format_number, format_percentage};

#[test]
fn test_format_number_zero() {
    assert_eq!(format_number(0), "0");
}

#[test]
fn test_format_number_small() {
    assert_eq!(format_number(42), "42");
    assert_eq!(format_number(999), "999");
}

#[test]
fn test_format_number_thousands() {
    assert_eq!(format_number(1_000), "1,000");
    assert_eq!(format_number(1_234), "1,234");
    assert_eq!(format_number(99_999), "99,999");
}

#[test]
fn test_format_number_millions() {
    assert_eq!(format_number(1_000_000), "1,000,000");
    assert_eq!(format_number(1_234_567), "1,234,567");
}

#[test]
fn test_format_percentage_two_decimals() {
    assert_eq!(format_percentage(2, 3), "66.67%");
    assert_eq!(format_percentage(1, 3), "33.33%");
    assert_eq!(format_percentage(3, 3), "100.00%");
    assert_eq!(format_percentage(0, 7), "0.00%");
}

#[test]
fn test_format_percentage_zero_denominator() {
    assert_eq!(format_percentage(0, 0), "0.00%");
    assert_eq!(format_percentage(10, 0), "0.00%");
}
