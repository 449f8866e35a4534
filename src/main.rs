//! xlsxcat CLI: merge every workbook under a directory into one delimited file.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use xlsxcat::engine::Cli;
use xlsxcat::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
