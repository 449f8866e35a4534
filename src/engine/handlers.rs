//! Command handler wiring CLI arguments into a validated pipeline run.

use anyhow::Result;

use crate::Config;
use crate::engine::arg_parser::Cli;
use crate::utils::config::parse_delimiter;
use crate::utils::prompt_for_dir;
use crate::utils::setup_logging;

/// Setup logging and build a validated Config from CLI arguments, prompting
/// for the input directory when it was omitted.
fn setup_run(cli: &Cli) -> Result<Config> {
    setup_logging(cli.verbose);

    let delimiter = parse_delimiter(&cli.delimiter)?;
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => prompt_for_dir("Enter path to directory: ")?,
    };

    let config = Config {
        root,
        sheet_name: cli.sheet.clone(),
        starts_with: cli.starts_with.clone(),
        output_name: cli.output.clone(),
        output_dir: cli.output_dir.clone(),
        delimiter,
        max_readers: cli.readers,
        recursive: cli.recursive,
        archive: cli.archive,
    };
    config.validate()?;
    Ok(config)
}

/// Handle a CLI run end to end.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let config = setup_run(cli)?;
    let summary = crate::consolidate(&config)?;
    log::info!(
        "{} rows consolidated from {} of {} workbooks ({} skipped)",
        summary.rows_written,
        summary.files_discovered - summary.files_skipped,
        summary.files_discovered,
        summary.files_skipped
    );
    Ok(())
}
