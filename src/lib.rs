//! xlsxcat: consolidate rows from many Excel workbooks into one delimited file.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;
pub use utils::config::Config;

use log::debug;

/// Result alias used by public xlsxcat API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: consolidate every recognized workbook under
/// `config.root` into one timestamped delimited file and return the run
/// totals.
///
/// Per-file problems (unreadable workbook, missing sheet) are logged and
/// skipped; the only fatal I/O error is failing to create the output file.
/// Rows keep their source order within each file; no order is defined
/// between rows coming from different files.
pub fn consolidate(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        config
    );
    debug!("{}", config_str);

    pipeline::run_pipeline(config)
}
