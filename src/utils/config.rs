//! Run configuration and tuning constants in one place.

use anyhow::{Result, bail};
use std::path::PathBuf;

// ---- Writer tuning ----

/// The writer flushes its buffer and the progress display every this many rows.
pub const FLUSH_EVERY_ROWS: usize = 1000;

/// Extension of the consolidated output file.
pub const OUTPUT_EXTENSION: &str = "csv";

// ---- Archival ----

/// Subfolder of the input root that consumed workbooks are moved into.
/// Pruned from recursive discovery so archived files are never re-consumed.
pub const ARCHIVE_DIR_NAME: &str = "Historical_Data";

// ---- Run configuration ----

/// Full options for a consolidation run. Validated once at startup via
/// [`Config::validate`]; immutable for the remainder of the run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the input workbooks live under.
    pub root: PathBuf,
    /// Target sheet name. When None, each workbook's first sheet is used.
    /// When Some, the match is exact and case-sensitive; workbooks without
    /// that sheet are skipped whole.
    pub sheet_name: Option<String>,
    /// Keep only files whose base name starts with this prefix.
    pub starts_with: Option<String>,
    /// Base name of the output file; a timestamp and extension are appended.
    pub output_name: String,
    /// Directory the output file is written to. When None, the input root.
    pub output_dir: Option<PathBuf>,
    /// Output field delimiter (one byte; see [`parse_delimiter`]).
    pub delimiter: u8,
    /// Upper bound on concurrently open workbooks / reader threads.
    pub max_readers: usize,
    /// Descend into subdirectories of the root.
    pub recursive: bool,
    /// Move consumed workbooks into [`ARCHIVE_DIR_NAME`] after the run.
    pub archive: bool,
}

impl Config {
    /// A config with the CLI defaults: first sheet, no prefix filter,
    /// output "Output" next to the inputs, `;` delimiter, 8 readers.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sheet_name: None,
            starts_with: None,
            output_name: "Output".to_string(),
            output_dir: None,
            delimiter: b';',
            max_readers: 8,
            recursive: false,
            archive: false,
        }
    }

    /// Validate once at startup. Anything rejected here is fatal before a
    /// single workbook is opened.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            bail!("a folder path to a directory is mandatory");
        }
        if !self.root.is_dir() {
            bail!("input path [{}] is not a directory", self.root.display());
        }
        if self.max_readers == 0 {
            bail!("the number of concurrent readers must be at least 1");
        }
        if self.output_name.is_empty() {
            bail!("the output file name must not be empty");
        }
        Ok(())
    }
}

/// Parse the delimiter option: exactly one single-byte character.
/// More or fewer (including multi-byte characters) is a fatal
/// configuration error.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => bail!(
            "the delimiter can only be 1 character long. Input provided: [{}]",
            s
        ),
    }
}
