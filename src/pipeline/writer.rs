//! The aggregating writer: the single consumer of the row transport,
//! serializing every received row into one delimited output file.

use anyhow::{Context, Result};
use chrono::Local;
use crossbeam_channel::Receiver;
use kdam::BarExt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::engine::progress::create_row_counter;
use crate::types::Row;
use crate::utils::config::{Config, FLUSH_EVERY_ROWS, OUTPUT_EXTENSION};

/// Resolve the output file path: `{output_dir or root}/{name} {timestamp}.csv`.
pub fn resolve_output_path(config: &Config) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d %H_%M_%S");
    let file_name = format!("{} {}.{}", config.output_name, stamp, OUTPUT_EXTENSION);
    config
        .output_dir
        .as_deref()
        .unwrap_or(&config.root)
        .join(file_name)
}

/// Create the output file. This is the pipeline's one unrecoverable I/O
/// error: without it the run has no product.
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("unable to create file: {}", path.display()))
}

/// Spawn the writer thread: drain `row_rx` until the transport closes,
/// then flush and return the number of rows written.
pub fn spawn_writer(file: File, delimiter: u8, row_rx: Receiver<Row>) -> JoinHandle<Result<usize>> {
    thread::spawn(move || write_rows(file, delimiter, row_rx))
}

/// Writer loop. Runs for the lifetime of the run; terminates only once
/// every sender has dropped and the buffered rows are drained, so every
/// emitted row is written. The row counter lives on this thread alone.
fn write_rows(file: File, delimiter: u8, row_rx: Receiver<Row>) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        // Rows keep the width they had in their source sheet.
        .flexible(true)
        .from_writer(file);

    let mut counter = create_row_counter();
    let mut count = 0_usize;
    while let Ok(row) = row_rx.recv() {
        writer
            .write_record(&row)
            .context("unable to write row to output")?;
        count += 1;
        let _ = counter.update(1);
        if count.is_multiple_of(FLUSH_EVERY_ROWS) {
            writer.flush().context("unable to flush output")?;
        }
    }
    writer.flush().context("unable to flush output")?;
    let _ = counter.refresh();
    eprintln!();
    log::info!("Rows processed: {} - Finished", count);
    Ok(count)
}
