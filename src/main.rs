use std::path::PathBuf;

use clap::Parser;

use driftcheck::checks::{Tolerances, configured_checks};
use driftcheck::query::QueryCli;
use driftcheck::validate::{self, Options};

/// Compare cached warehouse scalars against live query results.
///
/// Reads each configured cached scalar, re-runs its query live, and exits 1
/// if any value drifts beyond its tolerance.
#[derive(Parser)]
#[command(name = "driftcheck", version)]
struct Cli {
    /// Directory holding the cache snapshots produced by the render step
    #[arg(long, default_value = driftcheck::cache::DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let options = Options {
        cache_dir: cli.cache_dir,
    };
    let executor = QueryCli::from_env();

    match validate::run(
        &configured_checks(),
        &Tolerances::default(),
        &options,
        &executor,
    ) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            anstream::eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
