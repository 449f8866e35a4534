//! Interactive fallback for configuration missing from the command line.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Ask the user for a directory path on stdin. An empty answer is a fatal
/// configuration error: the pipeline cannot run without an input root.
pub fn prompt_for_dir(prompt: &str) -> Result<PathBuf> {
    print!("{}", prompt);
    io::stdout().flush().context("unable to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("unable to read from stdin")?;

    let line = line.trim();
    if line.is_empty() {
        anyhow::bail!("a folder path to a directory is mandatory");
    }
    Ok(PathBuf::from(line))
}
