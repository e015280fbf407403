//! Default configuration constants.
//!
//! These values define the metric-name mini-language and the defaults the
//! evaluation tool falls back to when nothing is specified.

// =============================================================================
// Metric Names
// =============================================================================

/// Metrics evaluated when the caller does not name any.
pub const DEFAULT_METRICS: &[&str] = &[
    "P@10", "P@20", "P@30", "P@50", "P@100", "P@200", "P@500", "P@1000", "RBP:95",
];

/// Prefix of precision-at-k metric names, followed by the cutoff.
pub const PRECISION_PREFIX: &str = "P@";

/// Prefix of rank-biased precision metric names, followed by the persistence
/// as an integer percentage.
pub const RBP_PREFIX: &str = "RBP:";

/// Largest accepted RBP persistence percentage.
pub const RBP_PERCENT_MAX: u32 = 100;

// =============================================================================
// Output
// =============================================================================

/// Digits after the decimal point when printing averages.
pub const DEFAULT_DECIMALS: usize = 6;
