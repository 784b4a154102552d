//! Live query execution boundary.
//!
//! The warehouse is reached through an external CLI invoked as
//! `<bin> query --yes --max-results 1 <sql>`. Its stdout is JSON with a
//! `rows` array; the first row's first column carries the live value
//! (queries alias it `val`).

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::cache::numeric_value;
use crate::exec::Cmd;

/// Overrides the query binary. Tests point this at a mock executable.
pub const QUERY_BIN_ENV_VAR: &str = "DRIFTCHECK_QUERY_BIN";

const DEFAULT_QUERY_BIN: &str = "bigquery";

/// How many characters of a failed query's stderr end up in the warning line.
const STDERR_SNIPPET_LEN: usize = 200;

/// Fetches the live value for one validation query.
///
/// `Ok(None)` means the query ran but returned no rows; callers warn and
/// move on rather than failing the run.
pub trait QueryExecutor {
    fn fetch_scalar(&self, sql: &str) -> Result<Option<f64>>;
}

/// Production executor: shells out to the query CLI and parses its stdout.
pub struct QueryCli {
    program: String,
    max_results: u32,
}

impl QueryCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            max_results: 1,
        }
    }

    /// Executor for the configured binary: `DRIFTCHECK_QUERY_BIN` if set,
    /// `bigquery` otherwise.
    pub fn from_env() -> Self {
        let program =
            std::env::var(QUERY_BIN_ENV_VAR).unwrap_or_else(|_| DEFAULT_QUERY_BIN.to_string());
        Self::new(program)
    }
}

impl QueryExecutor for QueryCli {
    fn fetch_scalar(&self, sql: &str) -> Result<Option<f64>> {
        let output = Cmd::new(self.program.as_str())
            .args(["query", "--yes", "--max-results"])
            .arg(self.max_results.to_string())
            .arg(sql)
            .run()
            .with_context(|| format!("failed to run {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("query failed: {}", snippet(&stderr));
        }

        parse_live_value(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the query CLI's stdout into the live value. `Ok(None)` for an
/// empty `rows` array.
pub fn parse_live_value(stdout: &str) -> Result<Option<f64>> {
    #[derive(Deserialize)]
    struct QueryResponse {
        #[serde(default)]
        rows: Vec<serde_json::Map<String, Value>>,
    }

    let response: QueryResponse =
        serde_json::from_str(stdout).context("query output is not valid JSON")?;

    let Some(row) = response.rows.first() else {
        return Ok(None);
    };
    let Some(value) = row.values().next() else {
        bail!("query returned a row with no columns");
    };
    match numeric_value(value) {
        Some(live) => Ok(Some(live)),
        None => bail!("query returned a non-numeric value: {value}"),
    }
}

fn snippet(stderr: &str) -> String {
    let trimmed = stderr.trim();
    match trimmed.char_indices().nth(STDERR_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
