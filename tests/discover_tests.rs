//! Discovery tests against real fixture trees: extension and prefix
//! filters, recursion, archive-folder pruning.

use std::fs;
use std::path::Path;
use xlsxcat::Config;
use xlsxcat::pipeline::discover_inputs;
use xlsxcat::utils::config::ARCHIVE_DIR_NAME;

/// Create empty files under `dir` (discovery looks at names only).
fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Discovered base names, sorted for stable assertions.
fn discovered_names(config: &Config) -> Vec<String> {
    let mut names: Vec<String> = discover_inputs(config)
        .into_iter()
        .map(|f| f.name)
        .collect();
    names.sort();
    names
}

#[test]
fn test_flat_dir_keeps_only_spreadsheets() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(
        dir.path(),
        &["a.xlsx", "b.xlsm", "c.txt", "d.csv", "E.XLSX", "noext"],
    );

    let config = Config::new(dir.path());
    assert_eq!(discovered_names(&config), ["E.XLSX", "a.xlsx", "b.xlsm"]);
}

#[test]
fn test_empty_dir_discovers_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path());
    assert!(discover_inputs(&config).is_empty());
}

#[test]
fn test_non_recursive_ignores_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["top.xlsx"]);
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    touch_all(&sub, &["below.xlsx"]);

    let config = Config::new(dir.path());
    assert_eq!(discovered_names(&config), ["top.xlsx"]);
}

#[test]
fn test_recursive_descends_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["top.xlsx"]);
    let sub = dir.path().join("nested").join("deeper");
    fs::create_dir_all(&sub).unwrap();
    touch_all(&sub, &["below.xlsx"]);

    let mut config = Config::new(dir.path());
    config.recursive = true;
    assert_eq!(discovered_names(&config), ["below.xlsx", "top.xlsx"]);
}

#[test]
fn test_prefix_filter_applies_to_base_name() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(
        dir.path(),
        &["Sales_jan.xlsx", "Sales_feb.xlsx", "Costs_jan.xlsx"],
    );

    let mut config = Config::new(dir.path());
    config.starts_with = Some("Sales".to_string());
    assert_eq!(
        discovered_names(&config),
        ["Sales_feb.xlsx", "Sales_jan.xlsx"]
    );
}

#[test]
fn test_prefix_longer_than_file_name_excludes_it() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["a.xlsx"]);

    let mut config = Config::new(dir.path());
    config.starts_with = Some("a_prefix_longer_than_the_name".to_string());
    assert!(discover_inputs(&config).is_empty());
}

#[test]
fn test_archive_folder_is_pruned_from_recursive_walk() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["fresh.xlsx"]);
    let archived = dir.path().join(ARCHIVE_DIR_NAME);
    fs::create_dir(&archived).unwrap();
    touch_all(&archived, &["consumed.xlsx"]);

    let mut config = Config::new(dir.path());
    config.recursive = true;
    assert_eq!(discovered_names(&config), ["fresh.xlsx"]);
}
