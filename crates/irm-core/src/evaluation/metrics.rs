//! Concrete weighted-precision metrics.
//!
//! - Precision@k
//! - Rank-Biased Precision (RBP)
//!
//! # References
//!
//! - Moffat & Zobel (2008). "Rank-biased precision for measurement of retrieval effectiveness"

use super::weighted::{RelevanceTransform, WeightedPrecision};
use super::weights::{Series, WeightSequence};

/// Builds a graded weighted-precision metric over the given weights.
///
/// Relevance grades are weighted as-is and the cutoff is unbounded, so only
/// the number of weights (if finite) and the ranking length limit the sum.
pub fn weighted_precision(weights: impl Into<WeightSequence>) -> WeightedPrecision {
    WeightedPrecision::new(weights, None, RelevanceTransform::Identity)
}

/// Builds Precision@k.
///
/// Precision@k is the fraction of the top k results that are relevant
/// (grade > 0).
///
/// # Formula
///
/// ```text
/// P@k = |relevant ∩ top_k| / k
/// ```
///
/// The denominator is always `k`. A ranking shorter than `k` is penalized for
/// the missing positions rather than scored over its own length.
///
/// Every weight is `1/k`, generated on demand, so no `k`-length list is
/// allocated however large `k` is.
///
/// # Example
///
/// ```
/// use irm_core::evaluation::precision_at;
///
/// let p4 = precision_at(4);
/// assert_eq!(p4.evaluate(&[1, 1, 1, 0, 0, 1, 0]), 0.75);
/// ```
pub fn precision_at(k: usize) -> WeightedPrecision {
    let weight = 1.0 / k as f64;
    WeightedPrecision::new(
        Series::new(move |_| weight),
        Some(k),
        RelevanceTransform::Binary,
    )
}

/// Builds Rank-Biased Precision with the given persistence.
///
/// RBP models a user who looks at the first result and then moves on to each
/// next one with probability `persistence`.
///
/// # Formula
///
/// ```text
/// RBP = (1 - p) * Σ rel_i * p^i   for i in 0..n
/// ```
///
/// Weights are generated lazily and the cutoff is unbounded. With
/// `persistence = 0` only the first rank counts; as `persistence` approaches 1
/// the weights flatten out across the whole ranking.
pub fn rank_biased_precision(persistence: f64) -> WeightedPrecision {
    let series = Series::new(move |n| (1.0 - persistence) * persistence.powf(n as f64));
    WeightedPrecision::new(series, None, RelevanceTransform::Binary)
}

// ============================================================================
// Tests
// ============================================================================
