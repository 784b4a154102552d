//! Check declarations and tolerance policy.
//!
//! This file is the editing surface: add one [`Check`] per cached scalar to
//! validate, and list any keys that need the tighter tolerance in
//! [`STRICT_KEYS`]. There is deliberately no external config format — checks
//! change in lockstep with the render step that produces the cache, so they
//! live in code next to the thresholds.
//!
//! Every query must return a single row with a single column aliased `val`.

/// Relative drift tolerated for most scalars (5%).
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Tighter tolerance (2%) for high-stakes scalars listed in [`STRICT_KEYS`].
pub const STRICT_THRESHOLD: f64 = 0.02;

/// Scalar keys that get [`STRICT_THRESHOLD`] instead of the default.
pub const STRICT_KEYS: &[&str] = &[];

/// One cached-scalar validation: which cache file, which scalar inside it,
/// and the query that recomputes the value live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub cache_name: String,
    pub scalar_key: String,
    pub query: String,
}

impl Check {
    pub fn new(
        cache_name: impl Into<String>,
        scalar_key: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            cache_name: cache_name.into(),
            scalar_key: scalar_key.into(),
            query: query.into(),
        }
    }

    /// `name.key` label used in status lines.
    pub fn label(&self) -> String {
        format!("{}.{}", self.cache_name, self.scalar_key)
    }
}

/// Drift tolerance policy: one default threshold, one strict threshold, and
/// the set of scalar keys the strict threshold applies to.
#[derive(Debug, Clone)]
pub struct Tolerances {
    pub default_threshold: f64,
    pub strict_threshold: f64,
    pub strict_keys: Vec<String>,
}

impl Tolerances {
    /// The tolerance that applies to a scalar key: strict exactly when the
    /// key is in the strict set.
    pub fn threshold_for(&self, scalar_key: &str) -> f64 {
        if self.strict_keys.iter().any(|k| k == scalar_key) {
            self.strict_threshold
        } else {
            self.default_threshold
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            strict_threshold: STRICT_THRESHOLD,
            strict_keys: STRICT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The configured checks, evaluated in declaration order.
///
/// Example entry:
/// ```ignore
/// Check::new(
///     "deal_flow",
///     "total_deals",
///     "SELECT COUNT(*) AS val FROM `project.dataset.deals` WHERE stage != 'dead'",
/// )
/// ```
pub fn configured_checks() -> Vec<Check> {
    vec![]
}
