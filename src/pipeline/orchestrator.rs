//! Pipeline lifecycle: output first (it must be ready before any row can be
//! produced), then discovery, then the bounded reader pool; shutdown is
//! join readers → transport closes → join writer → archive.

use anyhow::Result;
use log::debug;

use crate::pipeline::archive::archive_inputs;
use crate::pipeline::context::create_pipeline_channels;
use crate::pipeline::discover::discover_inputs;
use crate::pipeline::reader::spawn_readers;
use crate::pipeline::writer::{create_output, resolve_output_path, spawn_writer};
use crate::types::RunSummary;
use crate::utils::config::Config;

/// Run the full consolidation pipeline for a validated config.
pub fn run_pipeline(config: &Config) -> Result<RunSummary> {
    // Unwritable output aborts here, before any workbook is opened.
    let out_path = resolve_output_path(config);
    let out_file = create_output(&out_path)?;
    log::info!("Writing to [{}]", out_path.display());

    let inputs = discover_inputs(config);
    debug!("{} input files discovered", inputs.len());

    let channels = create_pipeline_channels(inputs.len());
    let writer_handle = spawn_writer(out_file, config.delimiter, channels.row_rx);

    // Fill and close the claim channel before any reader starts; capacity
    // covers the whole input set, so this never blocks.
    for input in &inputs {
        let _ = channels.file_tx.send(input.clone());
    }
    drop(channels.file_tx);

    // Never more readers than inputs.
    let reader_count = config.max_readers.min(inputs.len());
    let reader_handles = spawn_readers(
        channels.file_rx,
        &channels.row_tx,
        config.sheet_name.as_deref(),
        reader_count,
    );
    // Readers now hold the only senders: the transport closes exactly when
    // the last reader terminates, and the writer drains what is buffered.
    drop(channels.row_tx);

    let mut files_skipped = 0_usize;
    for handle in reader_handles {
        files_skipped += handle
            .join()
            .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    }
    let rows_written = writer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("writer thread panicked"))??;

    if config.archive {
        archive_inputs(&inputs, &config.root);
    }

    Ok(RunSummary {
        files_discovered: inputs.len(),
        files_skipped,
        rows_written,
    })
}
