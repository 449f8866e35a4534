//! Progress display for the writer thread.

use kdam::{Animation, Bar};

/// Create a row counter for unknown total (shows count without percentage).
/// Owned and updated by the writer thread only; no synchronization needed.
pub fn create_row_counter() -> Bar {
    kdam::tqdm!(
        total = 0,
        desc = "rows",
        animation = Animation::Classic,
        position = 0,
        unit = " rows"
    )
}
