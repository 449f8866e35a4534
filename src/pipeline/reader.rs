//! Extraction workers: claim workbooks from the file channel, open them,
//! resolve the target sheet, and emit rows onto the row transport.

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::types::{InputFile, Row};

/// Spawn `count` reader threads over the shared file channel. Each thread
/// holds one workbook open at a time, so `count` bounds the number of
/// simultaneously open resources. Caller must drop its own `row_tx` clone
/// after this so the transport closes when the last reader exits.
pub fn spawn_readers(
    file_rx: Receiver<InputFile>,
    row_tx: &Sender<Row>,
    sheet_name: Option<&str>,
    count: usize,
) -> Vec<JoinHandle<usize>> {
    (0..count)
        .map(|_| {
            let file_rx = file_rx.clone();
            let row_tx = row_tx.clone();
            let sheet_name = sheet_name.map(str::to_string);
            thread::spawn(move || reader_loop(file_rx, row_tx, sheet_name))
        })
        .collect()
}

/// Single reader: claim files until the channel drains, then exit. Returns
/// the number of files skipped. Claims are exclusive (each descriptor is
/// received once), so readers never coordinate with each other directly.
fn reader_loop(
    file_rx: Receiver<InputFile>,
    row_tx: Sender<Row>,
    sheet_name: Option<String>,
) -> usize {
    let mut skipped = 0_usize;
    while let Ok(input) = file_rx.recv() {
        match extract_rows(&input, sheet_name.as_deref(), &row_tx) {
            Ok(true) => {}
            // Writer side is gone; nothing left to produce for.
            Ok(false) => break,
            Err(err) => {
                log::warn!("Skipping file: [{}] {:#}", input.name, err);
                skipped += 1;
            }
        }
    }
    drop(row_tx);
    skipped
}

/// Emit every row of the selected sheet of one workbook onto `row_tx`,
/// preserving source order. Returns false when the transport has closed
/// underneath us (the writer terminated early).
fn extract_rows(input: &InputFile, sheet_name: Option<&str>, row_tx: &Sender<Row>) -> Result<bool> {
    let mut workbook = open_workbook_auto(&input.path)
        .with_context(|| format!("unable to open {}", input.path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let target = match sheet_name {
        // Unspecified: first sheet in the workbook's natural order.
        None => match sheet_names.first() {
            Some(first) => first.clone(),
            None => bail!("workbook has no sheets"),
        },
        // Specified: exact, case-sensitive match, or the file is skipped
        // whole. No partial extraction.
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                bail!("unable to find sheet: [{}]", name);
            }
            name.to_string()
        }
    };

    let range = workbook
        .worksheet_range(&target)
        .with_context(|| format!("unable to get rows from sheet: [{}]", target))?;

    for (idx, row) in range.rows().enumerate() {
        let cells: Row = row
            .iter()
            .map(|cell| cell_to_text(cell, idx, input))
            .collect();
        // A full channel blocks here: backpressure from the writer.
        if row_tx.send(cells).is_err() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Render a cell as opaque text. Error cells are reported and rendered
/// empty; the row itself is still emitted so per-file order stays intact.
fn cell_to_text(cell: &Data, row_idx: usize, input: &InputFile) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Error(e) => {
            log::warn!(
                "unable to read cell at row {} of [{}]: {:?}",
                row_idx + 1,
                input.name,
                e
            );
            String::new()
        }
        other => other.to_string(),
    }
}
