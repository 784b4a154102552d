//! Error formatting helpers.
//!
//! Uses anyhow for error propagation. Fatal errors are pre-styled here so
//! main can print them as-is.

use std::path::Path;

use crate::styling::{ERROR, ERROR_EMOJI, HINT, HINT_EMOJI};

/// Empty cache directory: fatal before any check runs.
pub fn no_cache_files(cache_dir: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "{ERROR_EMOJI} {ERROR}No cache files in {}{ERROR:#}\n\n{HINT_EMOJI} {HINT}Run 'just render' first to produce the cache snapshots{HINT:#}",
        cache_dir.display()
    )
}
