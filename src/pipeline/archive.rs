//! Post-run archival: relocate consumed workbooks into a subfolder of the
//! input root so the next run starts from a clean directory.

use std::fs;
use std::path::Path;

use crate::types::InputFile;
use crate::utils::config::ARCHIVE_DIR_NAME;

/// Move every discovered workbook into `<root>/Historical_Data`. A failure
/// to move one file is reported and does not block moving the rest.
pub fn archive_inputs(inputs: &[InputFile], root: &Path) {
    if inputs.is_empty() {
        log::info!("No files to archive.");
        return;
    }

    let archive_dir = root.join(ARCHIVE_DIR_NAME);
    if let Err(err) = fs::create_dir_all(&archive_dir) {
        log::warn!(
            "unable to create archive folder [{}]: {}",
            archive_dir.display(),
            err
        );
        return;
    }

    for input in inputs {
        let dest = archive_dir.join(&input.name);
        match fs::rename(&input.path, &dest) {
            Ok(()) => log::debug!("archived [{}]", input.name),
            Err(err) => log::warn!("unable to move [{}]: {}", input.path.display(), err),
        }
    }
}
