//! The validation loop: pre-flight, per-check evaluation, final summary.
//!
//! Checks run strictly sequentially in declaration order. Query problems
//! downgrade to warnings so one flaky check never hides the rest; only
//! drift above threshold fails the run.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cache;
use crate::checks::{Check, Tolerances};
use crate::error;
use crate::query::QueryExecutor;
use crate::report::{self, Verdict};
use crate::styling::{ERROR, OK, SKIP, SUCCESS_MARK, WARNING, WARNING_EMOJI, eprintln, println};

/// Options for one validation run.
#[derive(Debug, Clone)]
pub struct Options {
    pub cache_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(cache::DEFAULT_CACHE_DIR),
        }
    }
}

/// Why a check was skipped without being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingCacheFile,
    MissingScalarKey,
    /// Cached value is exactly zero: not a meaningful baseline, and
    /// relative drift would divide by it.
    ZeroBaseline,
}

/// Result of evaluating one check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Skipped(SkipReason),
    /// The check could not be evaluated (bad cache data, query error, empty
    /// result). Logged, never fatal.
    Warned(String),
    Passed {
        cached: f64,
        live: f64,
        drift: f64,
    },
    Failed {
        cached: f64,
        live: f64,
        drift: f64,
        threshold: f64,
    },
}

/// Final status of a run, carried to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    NoChecks,
    Passed,
    Failed { failures: usize },
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Failed { .. } => 1,
            RunStatus::NoChecks | RunStatus::Passed => 0,
        }
    }
}

/// Run the whole validation: pre-flight, every check in order, summary.
///
/// `Err` only for the fatal pre-flight (no cache snapshots at all); every
/// per-check problem is reported inline and folded into the [`RunStatus`].
pub fn run(
    checks: &[Check],
    tolerances: &Tolerances,
    options: &Options,
    executor: &dyn QueryExecutor,
) -> Result<RunStatus> {
    if !cache::has_snapshots(&options.cache_dir) {
        return Err(error::no_cache_files(&options.cache_dir));
    }

    if checks.is_empty() {
        println!("No checks configured. Add entries to configured_checks() in src/checks.rs");
        return Ok(RunStatus::NoChecks);
    }

    let outcomes = run_checks(checks, tolerances, &options.cache_dir, executor);

    let failures: Vec<String> = checks
        .iter()
        .zip(&outcomes)
        .filter_map(|(check, outcome)| match outcome {
            CheckOutcome::Failed {
                drift, threshold, ..
            } => Some(format!(
                "{}: drift {} > {}",
                check.label(),
                report::format_drift(*drift),
                report::format_threshold(*threshold)
            )),
            _ => None,
        })
        .collect();

    if failures.is_empty() {
        println!("\n{OK}{SUCCESS_MARK} Validation passed{OK:#}");
        Ok(RunStatus::Passed)
    } else {
        eprintln!(
            "\n{WARNING_EMOJI}  {ERROR}VALIDATION FAILED ({} issues):{ERROR:#}",
            failures.len()
        );
        for failure in &failures {
            eprintln!("  {failure}");
        }
        Ok(RunStatus::Failed {
            failures: failures.len(),
        })
    }
}

/// Evaluate each check in declaration order, printing one status line per
/// check as it completes. Never aborts early.
pub fn run_checks(
    checks: &[Check],
    tolerances: &Tolerances,
    cache_dir: &Path,
    executor: &dyn QueryExecutor,
) -> Vec<CheckOutcome> {
    checks
        .iter()
        .map(|check| {
            let outcome = evaluate(check, tolerances, cache_dir, executor);
            print_status(check, &outcome);
            outcome
        })
        .collect()
}

fn evaluate(
    check: &Check,
    tolerances: &Tolerances,
    cache_dir: &Path,
    executor: &dyn QueryExecutor,
) -> CheckOutcome {
    let path = cache::snapshot_path(cache_dir, &check.cache_name);
    if !path.exists() {
        return CheckOutcome::Skipped(SkipReason::MissingCacheFile);
    }

    let snapshot = match cache::load_snapshot(&path) {
        Ok(snapshot) => snapshot,
        Err(e) => return CheckOutcome::Warned(format!("{e:#}")),
    };

    let Some(raw) = snapshot.scalar(&check.scalar_key) else {
        return CheckOutcome::Skipped(SkipReason::MissingScalarKey);
    };
    let Some(cached) = cache::numeric_value(raw) else {
        return CheckOutcome::Warned(format!("cached value is not numeric: {raw}"));
    };
    if cached == 0.0 {
        return CheckOutcome::Skipped(SkipReason::ZeroBaseline);
    }

    let live = match executor.fetch_scalar(&check.query) {
        Ok(Some(live)) => live,
        Ok(None) => return CheckOutcome::Warned("live query returned no rows".to_string()),
        Err(e) => return CheckOutcome::Warned(format!("{e:#}")),
    };

    let drift = report::drift(cached, live);
    let threshold = tolerances.threshold_for(&check.scalar_key);
    match report::classify(drift, threshold) {
        Verdict::Ok => CheckOutcome::Passed {
            cached,
            live,
            drift,
        },
        Verdict::Fail => CheckOutcome::Failed {
            cached,
            live,
            drift,
            threshold,
        },
    }
}

fn print_status(check: &Check, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Skipped(SkipReason::MissingCacheFile) => {
            // Missing snapshots go to stderr so a piped run still surfaces them.
            eprintln!("{SKIP}SKIP {}: no cache file{SKIP:#}", check.cache_name);
        }
        CheckOutcome::Skipped(SkipReason::MissingScalarKey) => {
            println!("{SKIP}SKIP {}: not in cache scalars{SKIP:#}", check.label());
        }
        CheckOutcome::Skipped(SkipReason::ZeroBaseline) => {
            println!("{SKIP}SKIP {}: cached value is zero{SKIP:#}", check.label());
        }
        CheckOutcome::Warned(message) => {
            println!("{WARNING}WARN {}: {message}{WARNING:#}", check.label());
        }
        CheckOutcome::Passed {
            cached,
            live,
            drift,
        } => {
            println!(
                "{OK}OK{OK:#}   {}: cached={cached:.2} live={live:.2} drift={}",
                check.label(),
                report::format_drift(*drift)
            );
        }
        CheckOutcome::Failed {
            cached,
            live,
            drift,
            ..
        } => {
            println!(
                "{ERROR}FAIL{ERROR:#} {}: cached={cached:.2} live={live:.2} drift={}",
                check.label(),
                report::format_drift(*drift)
            );
        }
    }
}
