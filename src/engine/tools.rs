//! Path and filter utilities

use std::path::Path;

/// Extensions recognized as spreadsheet inputs.
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xlsx", "xlsm"];

/// Check if a path carries one of the recognized spreadsheet extensions.
/// ASCII-case-insensitive, so `REPORT.XLSX` from a Windows share matches.
pub fn has_spreadsheet_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Check a file name against an optional prefix filter. A filter longer
/// than the name simply does not match.
pub fn matches_prefix(name: &str, prefix: Option<&str>) -> bool {
    match prefix {
        Some(p) => name.starts_with(p),
        None => true,
    }
}
