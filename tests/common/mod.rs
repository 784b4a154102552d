#![allow(dead_code)] // each test binary uses a different slice of the harness

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

#[cfg(unix)]
pub mod mock_query;

/// Isolated workspace: a temp dir with a cache directory and a bin
/// directory for mock query executables.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp directory");
        std::fs::create_dir_all(temp.path().join("data/cache"))
            .expect("failed to create cache directory");
        std::fs::create_dir_all(temp.path().join("bin")).expect("failed to create bin directory");
        Self { temp }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.temp.path().join("data/cache")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    /// Write a cache snapshot with the given scalars.
    pub fn write_snapshot(&self, name: &str, scalars: serde_json::Value) {
        let body = serde_json::json!({ "scalars": scalars });
        std::fs::write(
            self.cache_dir().join(format!("{name}.json")),
            body.to_string(),
        )
        .expect("failed to write cache snapshot");
    }

    /// Run the driftcheck binary against this workspace's cache directory.
    pub fn run_driftcheck(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_driftcheck"))
            .arg("--cache-dir")
            .arg(self.cache_dir())
            .current_dir(self.temp.path())
            .output()
            .expect("failed to run driftcheck")
    }
}
