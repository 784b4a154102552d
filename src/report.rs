//! Drift computation and verdict classification.

/// Relative drift between a cached baseline and its live recomputation.
///
/// Only defined for non-zero baselines; the validation loop skips
/// zero-cached checks before getting here.
pub fn drift(cached: f64, live: f64) -> f64 {
    (live - cached).abs() / cached.abs()
}

/// Per-check verdict against the applicable threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Fail,
}

/// FAIL iff drift strictly exceeds the threshold. Drift exactly at the
/// threshold passes.
pub fn classify(drift: f64, threshold: f64) -> Verdict {
    if drift > threshold {
        Verdict::Fail
    } else {
        Verdict::Ok
    }
}

/// Drift rendered the way status lines show it: "4.0%".
pub fn format_drift(drift: f64) -> String {
    format!("{:.1}%", drift * 100.0)
}

/// Thresholds are round percentages in the failure summary: "5%".
pub fn format_threshold(threshold: f64) -> String {
    format!("{:.0}%", threshold * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, 104.0, 0.04)]
    #[case(100.0, 106.0, 0.06)]
    #[case(100.0, 96.0, 0.04)]
    #[case(-50.0, -51.0, 0.02)]
    #[case(200.0, 200.0, 0.0)]
    fn test_drift_is_relative_and_absolute(
        #[case] cached: f64,
        #[case] live: f64,
        #[case] expected: f64,
    ) {
        assert!((drift(cached, live) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.04, 0.05, Verdict::Ok)]
    #[case(0.06, 0.05, Verdict::Fail)]
    #[case(0.05, 0.05, Verdict::Ok)] // boundary: strictly greater fails
    #[case(0.021, 0.02, Verdict::Fail)]
    #[case(0.0, 0.05, Verdict::Ok)]
    fn test_classify(#[case] drift: f64, #[case] threshold: f64, #[case] expected: Verdict) {
        assert_eq!(classify(drift, threshold), expected);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_drift(0.04), "4.0%");
        assert_eq!(format_drift(0.0612), "6.1%");
        assert_eq!(format_threshold(0.05), "5%");
        assert_eq!(format_threshold(0.02), "2%");
    }
}
