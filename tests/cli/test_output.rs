//! Tests for CLI output formatting

use studyrag::cli::output::{
    format_bytes, format_duration, preview_lines, print_json, truncate_line,
};
use studyrag::Config;

// ============================================================================
// Size and time formatting
// ============================================================================

#[test]
fn test_format_bytes_units() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MB");
    assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
}

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.004), "4ms");
    assert_eq!(format_duration(2.5), "2.50s");
    assert_eq!(format_duration(125.0), "2m 5.0s");
}

// ============================================================================
// Previews
// ============================================================================

#[test]
fn test_truncate_multibyte_line() {
    let line = "세포막은 물질의 출입을 조절한다";
    let cut = truncate_line(line, 8);

    assert_eq!(cut.chars().count(), 8);
    assert!(cut.ends_with("..."));
    assert!(cut.starts_with("세포막은"));
}

#[test]
fn test_short_line_unchanged() {
    assert_eq!(truncate_line("ATP", 10), "ATP");
}

#[test]
fn test_preview_lines_limit() {
    let text = "one\ntwo\nthree\nfour\nfive\nsix";
    assert_eq!(preview_lines(text, 3, 100), ["one", "two", "three"]);
    assert!(preview_lines("", 3, 100).is_empty());
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_print_json_serializable() {
    assert!(print_json(&Config::default()).is_ok());
    assert!(print_json(&serde_json::json!({"passages": 3})).is_ok());
}
