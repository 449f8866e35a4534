use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const OUTPUT_NAME: &'static str = "Output";
    pub const DELIMITER: &'static str = ";";
    pub const MAX_READERS: usize = 8;
}

/// Consolidate Excel workbooks into a single delimited file.
#[derive(Clone, Parser)]
#[command(name = "xlsxcat")]
#[command(about = "Merge rows from every .xlsx/.xlsm under a directory into one CSV.")]
pub struct Cli {
    /// Directory containing the workbooks to consolidate. Prompted for on
    /// stdin when omitted.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Target sheet name. Default: the first sheet of each workbook.
    #[arg(long, short)]
    pub sheet: Option<String>,

    /// Keep only files whose name starts with this prefix.
    #[arg(long, short = 'w', value_name = "PREFIX")]
    pub starts_with: Option<String>,

    /// Base name of the output file; a timestamp and .csv are appended.
    #[arg(long, short, default_value = DefaultArgs::OUTPUT_NAME)]
    pub output: String,

    /// Directory the output file is written to. Default: DIR.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output field delimiter. Must be exactly one character.
    #[arg(long, short, default_value = DefaultArgs::DELIMITER)]
    pub delimiter: String,

    /// Maximum number of concurrently open workbooks.
    #[arg(long, short = 'g', value_name = "N", default_value_t = DefaultArgs::MAX_READERS)]
    pub readers: usize,

    /// Descend into subdirectories of DIR.
    #[arg(long, short)]
    pub recursive: bool,

    /// Move consumed workbooks into Historical_Data/ after the run.
    #[arg(long, short)]
    pub archive: bool,

    /// Verbose output.
    #[arg(long, short)]
    pub verbose: bool,
}
