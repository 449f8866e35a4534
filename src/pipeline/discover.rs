//! Source enumeration: materialize the list of input workbooks before any
//! of them is opened, so the reader pool can size itself on the real count.

use walkdir::{DirEntry, WalkDir};

use crate::engine::tools::{has_spreadsheet_ext, matches_prefix};
use crate::types::InputFile;
use crate::utils::config::{ARCHIVE_DIR_NAME, Config};

/// True for the archive subfolder, which must not be descended into:
/// previously archived workbooks are not inputs for this run.
fn is_archive_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ARCHIVE_DIR_NAME
}

/// Walk the root and collect every workbook passing the extension and
/// prefix filters. Rejected candidates and traversal errors are reported,
/// never silently dropped; a traversal error skips only the affected entry.
pub fn discover_inputs(config: &Config) -> Vec<InputFile> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(&config.root)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| !is_archive_dir(e));

    let mut inputs = Vec::new();
    for outcome in walker {
        let entry = match outcome {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            if entry.depth() > 0 {
                log::debug!("Skipping directory: [{}]", entry.file_name().to_string_lossy());
            }
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !has_spreadsheet_ext(entry.path()) {
            log::info!("Skipping file: [{}] unrecognized extension", name);
            continue;
        }
        if !matches_prefix(&name, config.starts_with.as_deref()) {
            log::info!(
                "Skipping file: [{}] does not start with: [{}]",
                name,
                config.starts_with.as_deref().unwrap_or_default()
            );
            continue;
        }

        inputs.push(InputFile::new(entry.into_path()));
    }
    inputs
}
