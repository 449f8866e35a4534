//! Public and internal types for the xlsxcat API and pipeline.

use std::path::PathBuf;

/// One extracted row: ordered text cells, width as read from the source.
pub type Row = Vec<String>;

/// A discovered, not-yet-opened candidate input workbook.
///
/// Immutable after discovery. Claimed by exactly one reader; kept by the
/// coordinator only so archival can relocate it after the run.
#[derive(Clone, Debug)]
pub struct InputFile {
    /// Full path to the workbook.
    pub path: PathBuf,
    /// Base file name, used in diagnostics and archival.
    pub name: String,
}

impl InputFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Totals reported after a run. The live row counter is owned by the writer
/// thread; these are filled in once everything has been joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Workbooks that passed discovery filters.
    pub files_discovered: usize,
    /// Workbooks that contributed no rows (open failure or missing sheet).
    pub files_skipped: usize,
    /// Rows serialized into the output file.
    pub rows_written: usize,
}
