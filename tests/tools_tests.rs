//! Pure helper tests: extension matching, prefix filter, delimiter
//! validation, config validation, output naming.

use std::path::{Path, PathBuf};
use xlsxcat::Config;
use xlsxcat::engine::{has_spreadsheet_ext, matches_prefix};
use xlsxcat::pipeline::resolve_output_path;
use xlsxcat::utils::config::parse_delimiter;

// --- has_spreadsheet_ext ---

#[test]
fn test_spreadsheet_ext_recognized() {
    assert!(has_spreadsheet_ext(Path::new("report.xlsx")));
    assert!(has_spreadsheet_ext(Path::new("macro.xlsm")));
}

#[test]
fn test_spreadsheet_ext_case_insensitive() {
    assert!(has_spreadsheet_ext(Path::new("REPORT.XLSX")));
    assert!(has_spreadsheet_ext(Path::new("Report.XlsM")));
}

#[test]
fn test_spreadsheet_ext_rejects_others() {
    assert!(!has_spreadsheet_ext(Path::new("report.csv")));
    assert!(!has_spreadsheet_ext(Path::new("report.xls")));
    assert!(!has_spreadsheet_ext(Path::new("report.xlsx.bak")));
    assert!(!has_spreadsheet_ext(Path::new("no_extension")));
}

// --- matches_prefix ---

#[test]
fn test_prefix_none_matches_everything() {
    assert!(matches_prefix("anything.xlsx", None));
}

#[test]
fn test_prefix_match_and_mismatch() {
    assert!(matches_prefix("Sales_2024.xlsx", Some("Sales")));
    assert!(!matches_prefix("Costs_2024.xlsx", Some("Sales")));
}

#[test]
fn test_prefix_longer_than_name_does_not_match() {
    // A filter longer than the candidate name must not match, never fault.
    assert!(!matches_prefix("a.xlsx", Some("a_very_long_prefix_filter")));
}

// --- parse_delimiter ---

#[test]
fn test_delimiter_single_char() {
    assert_eq!(parse_delimiter(";").unwrap(), b';');
    assert_eq!(parse_delimiter("|").unwrap(), b'|');
    assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
}

#[test]
fn test_delimiter_empty_rejected() {
    assert!(parse_delimiter("").is_err());
}

#[test]
fn test_delimiter_two_chars_rejected() {
    assert!(parse_delimiter(";;").is_err());
}

#[test]
fn test_delimiter_multibyte_char_rejected() {
    // One character but two bytes; the csv writer needs a single byte.
    assert!(parse_delimiter("ß").is_err());
}

// --- Config::validate ---

#[test]
fn test_validate_accepts_defaults_on_existing_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::new(dir.path()).validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_root() {
    assert!(Config::new(PathBuf::new()).validate().is_err());
}

#[test]
fn test_validate_rejects_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().join("does_not_exist"));
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_readers() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new(dir.path());
    config.max_readers = 0;
    assert!(config.validate().is_err());
}

// --- resolve_output_path ---

#[test]
fn test_output_path_defaults_to_root() {
    let mut config = Config::new("/data/in");
    config.output_name = "Merged".to_string();
    let path = resolve_output_path(&config);
    assert_eq!(path.parent(), Some(Path::new("/data/in")));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Merged "));
    assert!(name.ends_with(".csv"));
}

#[test]
fn test_output_path_honors_output_dir() {
    let mut config = Config::new("/data/in");
    config.output_dir = Some(PathBuf::from("/data/out"));
    let path = resolve_output_path(&config);
    assert_eq!(path.parent(), Some(Path::new("/data/out")));
}
