//! Weighted precision: a single weighted inner product over ranks.
//!
//! Both precision-at-k and rank-biased precision are instances of
//!
//! ```text
//! WP = Σ weight(i) * transform(rel_i)   for i in 0..min(cutoff, n, |weights|)
//! ```
//!
//! and differ only in the weights and cutoff they use.

use super::weights::WeightSequence;

/// Maps a raw relevance grade to the value that gets weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelevanceTransform {
    /// Pass the grade through unchanged (graded metrics).
    #[default]
    Identity,
    /// `1` for a positive grade, `0` otherwise.
    Binary,
}

impl RelevanceTransform {
    /// Applies the transform to a relevance grade.
    #[inline]
    pub fn apply(self, relevance: i32) -> f64 {
        match self {
            RelevanceTransform::Identity => f64::from(relevance),
            RelevanceTransform::Binary => {
                if relevance > 0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// A metric computed as a weighted sum of transformed relevance grades.
///
/// Immutable once built; one instance can score any number of rankings.
#[derive(Debug, Clone)]
pub struct WeightedPrecision {
    weights: WeightSequence,
    cutoff: Option<usize>,
    transform: RelevanceTransform,
}

impl WeightedPrecision {
    /// Creates a metric from its weights, rank cutoff and relevance transform.
    ///
    /// A `cutoff` of `None` means unbounded: only the ranking's own length and
    /// the number of weights limit the sum.
    pub fn new(
        weights: impl Into<WeightSequence>,
        cutoff: Option<usize>,
        transform: RelevanceTransform,
    ) -> Self {
        Self {
            weights: weights.into(),
            cutoff,
            transform,
        }
    }

    /// Scores one ranking, given the relevance grade at each rank in order.
    ///
    /// Returns `0.0` for an empty ranking or a zero cutoff. Summation runs in
    /// ascending rank order.
    pub fn evaluate(&self, relevance: &[i32]) -> f64 {
        let cutoff = self.effective_cutoff(relevance.len());
        self.weights
            .iter()
            .zip(relevance)
            .take(cutoff)
            .fold(0.0, |acc, (weight, &rel)| {
                acc + weight * self.transform.apply(rel)
            })
    }

    /// Number of ranks that contribute for a ranking of length `n`.
    pub fn effective_cutoff(&self, n: usize) -> usize {
        let cutoff = self.cutoff.map_or(n, |c| c.min(n));
        self.weights.len().map_or(cutoff, |len| cutoff.min(len))
    }

    /// The configured cutoff, `None` if unbounded.
    pub fn cutoff(&self) -> Option<usize> {
        self.cutoff
    }

    /// The weight sequence applied rank by rank.
    pub fn weights(&self) -> &WeightSequence {
        &self.weights
    }

    /// How relevance grades are mapped before weighting.
    pub fn transform(&self) -> RelevanceTransform {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::weights::Series;

    #[test]
    fn test_transform_binary() {
        assert_eq!(RelevanceTransform::Binary.apply(3), 1.0);
        assert_eq!(RelevanceTransform::Binary.apply(1), 1.0);
        assert_eq!(RelevanceTransform::Binary.apply(0), 0.0);
        assert_eq!(RelevanceTransform::Binary.apply(-2), 0.0);
    }

    #[test]
    fn test_transform_identity() {
        assert_eq!(RelevanceTransform::Identity.apply(3), 3.0);
        assert_eq!(RelevanceTransform::Identity.apply(-1), -1.0);
    }

    #[test]
    fn test_accessors() {
        let metric = WeightedPrecision::new(vec![0.5, 0.25], None, RelevanceTransform::Identity);
        assert_eq!(metric.cutoff(), None);
        assert_eq!(metric.weights().len(), Some(2));
        assert_eq!(metric.transform(), RelevanceTransform::Identity);
    }

    #[test]
    fn test_empty_ranking_scores_zero() {
        let metric = WeightedPrecision::new(vec![1.0; 5], Some(5), RelevanceTransform::Binary);
        assert_eq!(metric.evaluate(&[]), 0.0);
        assert!(metric.evaluate(&[]).is_sign_positive());
    }

    #[test]
    fn test_zero_cutoff_scores_zero() {
        let metric = WeightedPrecision::new(vec![1.0; 5], Some(0), RelevanceTransform::Binary);
        assert_eq!(metric.evaluate(&[1, 1, 1]), 0.0);
    }

    #[test]
    fn test_cutoff_is_min_of_all_limits() {
        let finite = WeightedPrecision::new(vec![1.0; 3], Some(10), RelevanceTransform::Binary);
        assert_eq!(finite.effective_cutoff(5), 3);
        assert_eq!(finite.effective_cutoff(2), 2);

        let infinite = WeightedPrecision::new(
            Series::new(|_| 1.0),
            Some(4),
            RelevanceTransform::Binary,
        );
        assert_eq!(infinite.effective_cutoff(100), 4);

        let unbounded =
            WeightedPrecision::new(Series::new(|_| 1.0), None, RelevanceTransform::Binary);
        assert_eq!(unbounded.effective_cutoff(100), 100);
    }

    #[test]
    fn test_graded_weighted_sum() {
        let metric = WeightedPrecision::new(
            vec![1.0, 0.5, 0.25],
            None,
            RelevanceTransform::Identity,
        );
        // 2*1.0 + 0*0.5 + 4*0.25 = 3.0; rank 4 has no weight
        assert!((metric.evaluate(&[2, 0, 4, 7]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_infinite_weights_bounded_by_ranking() {
        let metric =
            WeightedPrecision::new(Series::new(|_| 1.0), None, RelevanceTransform::Binary);
        assert_eq!(metric.evaluate(&[1, 0, 1, 1]), 3.0);
    }
}
