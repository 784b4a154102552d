//! Cached scalar snapshots.
//!
//! A snapshot is a JSON file at `<cache-dir>/<name>.json` produced by the
//! render step: `{"scalars": {"total_deals": 1234, ...}}`. Values may be
//! numbers or numeric strings; the render step is not strict about which.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Default location for cache snapshots, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "data/cache";

/// One parsed cache file. Scalars keep their declaration order so reports
/// read the way the render step wrote them.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub scalars: IndexMap<String, Value>,
}

impl Snapshot {
    /// Raw scalar value for a key, if present.
    pub fn scalar(&self, key: &str) -> Option<&Value> {
        self.scalars.get(key)
    }
}

/// Path of the snapshot backing a cache name.
pub fn snapshot_path(cache_dir: &Path, cache_name: &str) -> PathBuf {
    cache_dir.join(format!("{cache_name}.json"))
}

/// Read and parse one snapshot. The file is opened, read, and released here;
/// nothing holds it across checks.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("malformed cache snapshot {}", path.display()))
}

/// Whether the cache directory holds at least one `.json` snapshot.
/// A missing directory counts as empty.
pub fn has_snapshots(cache_dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(cache_dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        path.is_file() && path.extension().is_some_and(|ext| ext == "json")
    })
}

/// Coerce a JSON value to f64, accepting numbers and numeric strings.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
