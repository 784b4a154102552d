// Mock query CLI helpers.
//
// Each mock is a shell script standing in for the warehouse query CLI.
// Tests hand the script path to `QueryCli::new` (or set DRIFTCHECK_QUERY_BIN)
// so driftcheck runs the mock instead of a real warehouse client.

use std::fs;
use std::path::{Path, PathBuf};

/// Write an executable mock script and return its path.
pub fn write_mock_script(bin_dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let script_path = bin_dir.join(name);
    fs::write(&script_path, script).unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
    script_path
}

/// Mock that answers every query with a single `val` row.
pub fn create_mock_query(bin_dir: &Path, value: f64) -> PathBuf {
    write_mock_script(
        bin_dir,
        "bigquery",
        &format!("#!/bin/sh\nprintf '%s' '{{\"rows\":[{{\"val\":{value}}}]}}'\n"),
    )
}

/// Mock that answers with an empty rows array.
pub fn create_empty_rows_query(bin_dir: &Path) -> PathBuf {
    write_mock_script(bin_dir, "bigquery", "#!/bin/sh\nprintf '%s' '{\"rows\":[]}'\n")
}

/// Mock that fails with a diagnostic on stderr.
pub fn create_failing_query(bin_dir: &Path) -> PathBuf {
    write_mock_script(
        bin_dir,
        "bigquery",
        "#!/bin/sh\necho 'permission denied on dataset' >&2\nexit 1\n",
    )
}

/// Mock that fails for queries containing `boom` and answers `value` for
/// everything else. Lets one executor serve both halves of a
/// failure-then-success sequence.
pub fn create_selective_query(bin_dir: &Path, value: f64) -> PathBuf {
    write_mock_script(
        bin_dir,
        "bigquery",
        &format!(
            r#"#!/bin/sh
for arg in "$@"; do
    case "$arg" in
        *boom*) echo 'query backend unavailable' >&2; exit 1 ;;
    esac
done
printf '%s' '{{"rows":[{{"val":{value}}}]}}'
"#
        ),
    )
}

/// Mock that records each invocation by touching `marker` before answering.
pub fn create_recording_query(bin_dir: &Path, marker: &Path, value: f64) -> PathBuf {
    write_mock_script(
        bin_dir,
        "bigquery",
        &format!(
            "#!/bin/sh\ntouch '{}'\nprintf '%s' '{{\"rows\":[{{\"val\":{value}}}]}}'\n",
            marker.display()
        ),
    )
}
