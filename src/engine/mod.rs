//! Engine module: CLI surface and run handling.

pub mod arg_parser;
pub mod handlers;
pub mod progress;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use tools::{has_spreadsheet_ext, matches_prefix};
